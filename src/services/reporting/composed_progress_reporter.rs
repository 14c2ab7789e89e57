
use crate::services::reporting::ProgressReporter;
use async_trait::async_trait;

/// Forwards every notification to each of the underlying reporters in order
pub struct ComposedProgressReporter {
    reporters: Vec<Box<dyn ProgressReporter>>,
}

impl ComposedProgressReporter {
    pub fn new() -> Self {
        Self { reporters: Vec::new() }
    }

    pub fn add_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporters.push(reporter);
        self
    }
}

impl Default for ComposedProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressReporter for ComposedProgressReporter {
    async fn start_test(&self, name: &str) {
        for reporter in &self.reporters {
            reporter.start_test(name).await;
        }
    }

    async fn stop_test(&self, name: &str, failed: bool, skipped: bool, error: Option<&str>) {
        for reporter in &self.reporters {
            reporter.stop_test(name, failed, skipped, error).await;
        }
    }
}
