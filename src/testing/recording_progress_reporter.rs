use crate::services::reporting::ProgressReporter;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started(String),
    Stopped {
        name: String,
        failed: bool,
        skipped: bool,
        error: Option<String>,
    },
}

impl ProgressEvent {
    pub fn started(name: &str) -> Self {
        ProgressEvent::Started(name.to_string())
    }

    pub fn stopped(name: &str, failed: bool, skipped: bool, error: Option<&str>) -> Self {
        ProgressEvent::Stopped {
            name: name.to_string(),
            failed,
            skipped,
            error: error.map(str::to_string),
        }
    }
}

/// Keeps every notification in memory so tests can assert on them
#[derive(Default)]
pub struct RecordingProgressReporter {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("progress events lock poisoned").clone()
    }

    /// Events of a single test in the order they were received
    pub fn events_of(&self, name: &str) -> Vec<ProgressEvent> {
        self.events()
            .into_iter()
            .filter(|event| match event {
                ProgressEvent::Started(n) => n == name,
                ProgressEvent::Stopped { name: n, .. } => n == name,
            })
            .collect()
    }
}

#[async_trait]
impl ProgressReporter for RecordingProgressReporter {
    async fn start_test(&self, name: &str) {
        self.events
            .lock()
            .expect("progress events lock poisoned")
            .push(ProgressEvent::started(name));
    }

    async fn stop_test(&self, name: &str, failed: bool, skipped: bool, error: Option<&str>) {
        self.events
            .lock()
            .expect("progress events lock poisoned")
            .push(ProgressEvent::stopped(name, failed, skipped, error));
    }
}
