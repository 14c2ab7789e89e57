pub mod composed_progress_reporter;
pub mod log_progress_reporter;
pub mod sonobuoy_progress_reporter;

use async_trait::async_trait;

#[async_trait]
/// Receives start and stop notifications for every test of a run.
/// Reporting is best effort: implementations log delivery problems instead of returning them.
pub trait ProgressReporter: Send + Sync {
    async fn start_test(&self, name: &str);

    async fn stop_test(&self, name: &str, failed: bool, skipped: bool, error: Option<&str>);
}
