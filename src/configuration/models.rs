pub mod conformance_settings;
pub mod connection_settings;
pub mod namespace_prefix;
pub mod progress_settings;
pub mod target_environment;
