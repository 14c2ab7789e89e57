pub mod lifecycle_error;

use crate::services::backends::NamespaceClient;
use crate::services::lifecycle::lifecycle_error::LifecycleError;
use crate::services::naming::RunId;
use crate::services::reporting::ProgressReporter;
use log::{info, warn};
use std::sync::Arc;

/// Namespace owned by a single test, from creation until deletion.
/// It is handed from the before hook to the after hook of the same test and
/// consumed by the latter, so a namespace is deleted at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct TestNamespace {
    test_name: String,
    namespace: String,
}

impl TestNamespace {
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Completion status of a test body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestOutcome {
    pub failed: bool,
    pub skipped: bool,
}

impl TestOutcome {
    pub fn passed() -> Self {
        TestOutcome::default()
    }

    pub fn failed() -> Self {
        TestOutcome {
            failed: true,
            skipped: false,
        }
    }

    pub fn skipped() -> Self {
        TestOutcome {
            failed: false,
            skipped: true,
        }
    }
}

/// Creates a namespace before each test and deletes it afterwards,
/// forwarding start and stop events to the progress reporter
pub struct NamespaceLifecycleManager {
    run_id: RunId,
    client: Arc<dyn NamespaceClient>,
    reporter: Arc<dyn ProgressReporter>,
}

impl NamespaceLifecycleManager {
    pub fn new(run_id: RunId, client: Arc<dyn NamespaceClient>, reporter: Arc<dyn ProgressReporter>) -> Self {
        NamespaceLifecycleManager {
            run_id,
            client,
            reporter,
        }
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    pub fn reporter(&self) -> Arc<dyn ProgressReporter> {
        self.reporter.clone()
    }

    pub async fn before_test(&self, test_name: &str) -> Result<TestNamespace, LifecycleError> {
        self.reporter.start_test(test_name).await;

        let namespace = self.run_id.namespace_name();
        info!("Creating namespace {} for test {}", namespace, test_name);

        if let Err(source) = self.client.create(&namespace).await {
            let error = LifecycleError::SetupFailure {
                test_name: test_name.to_string(),
                namespace,
                source,
            };
            self.reporter
                .stop_test(test_name, true, false, Some(error.to_string().as_str()))
                .await;
            return Err(error);
        }

        Ok(TestNamespace {
            test_name: test_name.to_string(),
            namespace,
        })
    }

    pub async fn after_test(&self, test_namespace: TestNamespace, outcome: TestOutcome) -> Result<(), LifecycleError> {
        let TestNamespace { test_name, namespace } = test_namespace;
        self.reporter
            .stop_test(&test_name, outcome.failed, outcome.skipped, None)
            .await;

        info!("Deleting namespace {} for test {}", namespace, test_name);
        self.client.delete(&namespace).await.map_err(|source| {
            warn!("Failed to delete namespace {} for test {}: {}", namespace, test_name, source);
            LifecycleError::TeardownFailure {
                test_name,
                namespace,
                source,
            }
        })
    }
}
