pub mod environment_source;
pub mod models;
