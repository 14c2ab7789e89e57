use crate::configuration::models::connection_settings::ConnectionSettings;
use anyhow::{Context, bail};
use kube::Config;
use kube::config::{KubeConfigOptions, Kubeconfig};
use log::{debug, info};
use tokio::process::Command;

/// Resolves the client configuration described by the connection settings
pub async fn load(settings: &ConnectionSettings) -> anyhow::Result<Config> {
    match settings {
        ConnectionSettings::KubeconfigFile(path) => from_file(path).await,
        ConnectionSettings::KubeconfigCommand(command) => from_command(command).await,
        ConnectionSettings::InCluster => {
            info!("Using the service account of the pod");
            Ok(Config::incluster()?)
        }
        ConnectionSettings::Inferred => {
            info!("Inferring Kubernetes configuration from the environment");
            Ok(Config::infer().await?)
        }
    }
}

async fn from_file(path: &str) -> anyhow::Result<Config> {
    info!("Reading kubeconfig file {}", path);
    let document = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Kubeconfig file {} can not be read", path))?;
    from_document(&document).await
}

async fn from_command(command: &str) -> anyhow::Result<Config> {
    info!("Running kubeconfig command {:?}", command);
    let output = Command::new("sh").arg("-c").arg(command).output().await?;
    if !output.status.success() {
        bail!(
            "Kubeconfig command exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    let document = String::from_utf8(output.stdout).context("Kubeconfig command printed invalid UTF-8")?;
    from_document(&document).await
}

async fn from_document(document: &str) -> anyhow::Result<Config> {
    let kubeconfig: Kubeconfig = serde_yml::from_str(document).context("Kubeconfig is not valid YAML")?;
    debug!("Kubeconfig parsed, current context {:?}", kubeconfig.current_context);
    Ok(Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?)
}
