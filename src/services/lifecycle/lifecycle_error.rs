
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by the namespace lifecycle hooks
#[derive(Debug)]
pub enum LifecycleError {
    /// The cluster client could not be built, the whole run is aborted
    ClientUnavailable(anyhow::Error),

    /// The progress reporters could not be built, the whole run is aborted
    ReporterUnavailable(anyhow::Error),

    /// The namespace of a test could not be created, the test is failed
    SetupFailure {
        test_name: String,
        namespace: String,
        source: anyhow::Error,
    },

    /// The namespace of a test could not be deleted, the test result stands
    TeardownFailure {
        test_name: String,
        namespace: String,
        source: anyhow::Error,
    },
}

impl LifecycleError {
    pub fn is_setup_failure(&self) -> bool {
        !matches!(self, LifecycleError::TeardownFailure { .. })
    }
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleError::ClientUnavailable(cause) => write!(f, "Failed to create the cluster client: {}", cause),
            LifecycleError::ReporterUnavailable(cause) => {
                write!(f, "Failed to create the progress reporter: {}", cause)
            }
            LifecycleError::SetupFailure {
                test_name,
                namespace,
                source,
            } => write!(
                f,
                "Failed to create namespace '{}' for test '{}': {}",
                namespace, test_name, source
            ),
            LifecycleError::TeardownFailure {
                test_name,
                namespace,
                source,
            } => write!(
                f,
                "Failed to delete namespace '{}' for test '{}': {}",
                namespace, test_name, source
            ),
        }
    }
}

impl Error for LifecycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LifecycleError::ClientUnavailable(cause) | LifecycleError::ReporterUnavailable(cause) => Some(&**cause),
            LifecycleError::SetupFailure { source, .. } | LifecycleError::TeardownFailure { source, .. } => {
                Some(&**source)
            }
        }
    }
}
