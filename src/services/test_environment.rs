
use crate::configuration::models::conformance_settings::ConformanceSettings;
use crate::configuration::models::target_environment::TargetEnvironment;
use crate::services::backends::NamespaceClient;
use crate::services::backends::kubernetes::kubeconfig_loader;
use crate::services::backends::kubernetes::kubernetes_namespace_client::KubernetesNamespaceClient;
use crate::services::lifecycle::NamespaceLifecycleManager;
use crate::services::lifecycle::lifecycle_error::LifecycleError;
use crate::services::naming::RunId;
use crate::services::reporting::ProgressReporter;
use crate::services::reporting::composed_progress_reporter::ComposedProgressReporter;
use crate::services::reporting::log_progress_reporter::LogProgressReporter;
use crate::services::reporting::sonobuoy_progress_reporter::SonobuoyProgressReporter;
use anyhow::anyhow;
use kube::Client;
use log::info;
use std::sync::Arc;

/// Shared state of a conformance run.
/// Built once by the entry point and passed by reference to the suite runner.
pub struct TestEnvironment {
    settings: ConformanceSettings,
    lifecycle: NamespaceLifecycleManager,
    client: Option<Client>,
}

impl TestEnvironment {
    /// Connects to the cluster described by the settings.
    /// The client is created up front so tests can assume it is available.
    pub async fn setup(settings: ConformanceSettings) -> Result<Self, LifecycleError> {
        let run_id = RunId::generate(&settings.namespace_prefix);
        Self::setup_for_run(settings, run_id).await
    }

    /// Same as [`TestEnvironment::setup`] for a run whose identifier was already chosen
    pub async fn setup_for_run(settings: ConformanceSettings, run_id: RunId) -> Result<Self, LifecycleError> {
        let config = kubeconfig_loader::load(&settings.connection)
            .await
            .map_err(LifecycleError::ClientUnavailable)?;
        let client = Client::try_from(config).map_err(|e| LifecycleError::ClientUnavailable(e.into()))?;
        let reporter = build_reporter(&settings).map_err(LifecycleError::ReporterUnavailable)?;
        let namespaces = Arc::new(KubernetesNamespaceClient::new(client.clone()));

        let mut environment = Self::from_parts_for_run(settings, run_id, namespaces, reporter);
        environment.client = Some(client);
        Ok(environment)
    }

    /// Assembles an environment from explicit collaborators, without a cluster client
    pub fn from_parts(
        settings: ConformanceSettings,
        namespaces: Arc<dyn NamespaceClient>,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        let run_id = RunId::generate(&settings.namespace_prefix);
        Self::from_parts_for_run(settings, run_id, namespaces, reporter)
    }

    pub fn from_parts_for_run(
        settings: ConformanceSettings,
        run_id: RunId,
        namespaces: Arc<dyn NamespaceClient>,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Self {
        info!(
            "Starting conformance run {} against {} environment",
            run_id, settings.target_environment
        );
        TestEnvironment {
            lifecycle: NamespaceLifecycleManager::new(run_id, namespaces, reporter),
            settings,
            client: None,
        }
    }

    pub fn settings(&self) -> &ConformanceSettings {
        &self.settings
    }

    pub fn target_environment(&self) -> TargetEnvironment {
        self.settings.target_environment
    }

    pub fn run_id(&self) -> &RunId {
        self.lifecycle.run_id()
    }

    pub fn lifecycle(&self) -> &NamespaceLifecycleManager {
        &self.lifecycle
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    pub fn require_client(&self) -> anyhow::Result<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| anyhow!("Test environment {} has no cluster client", self.run_id()))
    }

    pub async fn teardown(self) {
        info!("Conformance run {} finished", self.run_id());
    }
}

fn build_reporter(settings: &ConformanceSettings) -> anyhow::Result<Arc<dyn ProgressReporter>> {
    let mut reporter = ComposedProgressReporter::new().add_reporter(Box::new(LogProgressReporter::new()));
    if let Some(progress) = &settings.progress {
        info!("Reporting progress to {}", progress.progress_url());
        reporter = reporter.add_reporter(Box::new(SonobuoyProgressReporter::new(progress.clone())?));
    }
    Ok(Arc::new(reporter))
}
