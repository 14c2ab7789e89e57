use crate::services::reporting::ProgressReporter;
use async_trait::async_trait;

pub struct LogProgressReporter;

impl LogProgressReporter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for LogProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressReporter for LogProgressReporter {
    async fn start_test(&self, name: &str) {
        log::info!(
            // Indicates the progress events for easier filtering in log aggregation systems
            log_type = "progress",
            test = name,
            event = "start";

            "Test started: {}", name);
    }

    async fn stop_test(&self, name: &str, failed: bool, skipped: bool, error: Option<&str>) {
        log::info!(
            log_type = "progress",
            test = name,
            event = "stop",
            failed = failed,
            skipped = skipped,
            error = error.unwrap_or_default();

            "Test finished: {}", name);
    }
}
