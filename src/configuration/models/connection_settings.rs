use crate::configuration::environment_source::EnvironmentSource;
use crate::configuration::models::conformance_settings::parse_flag;
use anyhow::Result;

pub const KUBECONFIG_FILE_KEY: &str = "CONFORMANCE_KUBECONFIG";
pub const KUBECONFIG_COMMAND_KEY: &str = "CONFORMANCE_KUBECONFIG_COMMAND";
pub const IN_CLUSTER_KEY: &str = "CONFORMANCE_IN_CLUSTER";

/// Describes where the cluster connection settings come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionSettings {
    /// Kubeconfig file path
    KubeconfigFile(String),

    /// Shell command that prints a kubeconfig, for example `kind get kubeconfig --name kind`
    KubeconfigCommand(String),

    /// Service account of the pod the suite runs in
    InCluster,

    /// Default kube client resolution: `KUBECONFIG`, `~/.kube/config`, then in-cluster
    Inferred,
}

impl ConnectionSettings {
    pub fn from_env(source: &dyn EnvironmentSource) -> Result<Self> {
        if let Some(path) = source.lookup(KUBECONFIG_FILE_KEY).filter(|v| !v.is_empty()) {
            return Ok(ConnectionSettings::KubeconfigFile(path));
        }
        if let Some(command) = source.lookup(KUBECONFIG_COMMAND_KEY).filter(|v| !v.is_empty()) {
            return Ok(ConnectionSettings::KubeconfigCommand(command));
        }
        if parse_flag(source, IN_CLUSTER_KEY, false)? {
            return Ok(ConnectionSettings::InCluster);
        }
        Ok(ConnectionSettings::Inferred)
    }
}
