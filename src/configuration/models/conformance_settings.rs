#[cfg(test)]
mod tests;

use crate::configuration::environment_source::EnvironmentSource;
use crate::configuration::models::connection_settings::ConnectionSettings;
use crate::configuration::models::namespace_prefix::NamespacePrefix;
use crate::configuration::models::progress_settings::ProgressSettings;
use crate::configuration::models::target_environment::TargetEnvironment;
use anyhow::{Result, bail};

pub const PARALLEL_KEY: &str = "CONFORMANCE_PARALLEL";

/// Settings of a single conformance run
#[derive(Debug, Clone)]
pub struct ConformanceSettings {
    pub target_environment: TargetEnvironment,
    pub namespace_prefix: NamespacePrefix,
    pub connection: ConnectionSettings,
    pub progress: Option<ProgressSettings>,
    pub parallel: bool,
}

impl ConformanceSettings {
    pub fn from_env(source: &dyn EnvironmentSource) -> Result<Self> {
        Ok(ConformanceSettings {
            target_environment: TargetEnvironment::from_env(source),
            namespace_prefix: NamespacePrefix::from_env(source),
            connection: ConnectionSettings::from_env(source)?,
            progress: ProgressSettings::from_env(source)?,
            parallel: parse_flag(source, PARALLEL_KEY, true)?,
        })
    }
}

impl Default for ConformanceSettings {
    fn default() -> Self {
        ConformanceSettings {
            target_environment: TargetEnvironment::Eks,
            namespace_prefix: NamespacePrefix::default(),
            connection: ConnectionSettings::Inferred,
            progress: None,
            parallel: true,
        }
    }
}

pub(crate) fn parse_flag(source: &dyn EnvironmentSource, key: &str, default: bool) -> Result<bool> {
    match source.lookup(key).as_deref() {
        None | Some("") => Ok(default),
        Some("1") | Some("true") | Some("TRUE") | Some("True") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("False") => Ok(false),
        Some(other) => bail!("{} must be a boolean, got '{}'", key, other),
    }
}
