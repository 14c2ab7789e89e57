pub mod backends;
pub mod lifecycle;
pub mod naming;
pub mod observability;
pub mod reporting;
pub mod suite_runner;
pub mod test_environment;
