#[cfg(test)]
mod tests;

pub mod composed_logger;

use crate::services::observability::composed_logger::ComposedLogger;
use log::{LevelFilter, SetLoggerError};

pub const LOG_LEVEL_KEY: &str = "RUST_LOG";

/// Builds the console logger of the conformance binary from `RUST_LOG` style
/// directives, e.g. `info,kube=debug`. Without directives everything at info
/// and above is printed.
pub fn composed_logger(directives: Option<&str>) -> ComposedLogger {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);
    if let Some(directives) = directives {
        builder.parse_filters(directives);
    }
    let console = builder.format_timestamp_millis().build();
    // The most verbose directive bounds the global level, per-module filtering stays with the console logger
    let max_level = console.filter();
    ComposedLogger::new()
        .with_logger(Box::new(console))
        .with_global_level(max_level)
}

/// Installs the console logger of the conformance binary
pub fn init_logging(directives: Option<&str>) -> Result<(), SetLoggerError> {
    composed_logger(directives).init()
}
