use crate::configuration::environment_source::EnvironmentSource;
use anyhow::{Context, Result};

pub const PROGRESS_PORT_KEY: &str = "SONOBUOY_PROGRESS_PORT";
pub const PLUGIN_NAME_KEY: &str = "SONOBUOY_PLUGIN_NAME";
pub const NODE_NAME_KEY: &str = "NODE_NAME";
pub const DEFAULT_PROGRESS_PORT: u16 = 8099;
pub const DEFAULT_PLUGIN_NAME: &str = "dr-conformance";

/// Settings of the Sonobuoy progress endpoint exposed to plugin containers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSettings {
    pub port: u16,
    pub plugin_name: String,
    pub node_name: String,
    /// Number of tests expected in the run, zero when unknown
    pub total_items: i64,
}

impl ProgressSettings {
    /// Returns None when the suite does not run as a Sonobuoy plugin
    pub fn from_env(source: &dyn EnvironmentSource) -> Result<Option<Self>> {
        let Some(port) = source.lookup(PROGRESS_PORT_KEY) else {
            return Ok(None);
        };
        let port = if port.is_empty() {
            DEFAULT_PROGRESS_PORT
        } else {
            port.parse::<u16>()
                .with_context(|| format!("{} must be a port number, got '{}'", PROGRESS_PORT_KEY, port))?
        };
        Ok(Some(ProgressSettings {
            port,
            plugin_name: source.lookup_or(PLUGIN_NAME_KEY, DEFAULT_PLUGIN_NAME),
            node_name: source.lookup_or(NODE_NAME_KEY, ""),
            total_items: 0,
        }))
    }

    pub fn progress_url(&self) -> String {
        format!("http://localhost:{}/progress", self.port)
    }
}
