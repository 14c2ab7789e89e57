#[cfg(test)]
mod tests;

use crate::configuration::models::progress_settings::ProgressSettings;
use crate::services::reporting::ProgressReporter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Progress document accepted by the Sonobuoy aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    #[serde(rename = "name")]
    pub plugin_name: String,
    pub node: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "msg")]
    pub message: String,
    #[serde(rename = "total", default)]
    pub total_items: i64,
    #[serde(rename = "completed", default)]
    pub completed_items: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

#[derive(Default)]
struct ProgressTally {
    completed: i64,
    failures: Vec<String>,
    errors: Vec<String>,
}

/// Posts progress updates to the sidecar endpoint of a Sonobuoy plugin
pub struct SonobuoyProgressReporter {
    http: reqwest::Client,
    url: String,
    settings: ProgressSettings,
    tally: Mutex<ProgressTally>,
}

impl SonobuoyProgressReporter {
    pub fn new(settings: ProgressSettings) -> anyhow::Result<Self> {
        let url = settings.progress_url();
        Self::with_url(url, settings)
    }

    pub fn with_url(url: String, settings: ProgressSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            // The progress endpoint is always served next to the plugin container
            .no_proxy()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(SonobuoyProgressReporter {
            http,
            url,
            settings,
            tally: Mutex::new(ProgressTally::default()),
        })
    }

    fn update(&self, message: String, tally: &ProgressTally) -> ProgressUpdate {
        ProgressUpdate {
            plugin_name: self.settings.plugin_name.clone(),
            node: self.settings.node_name.clone(),
            timestamp: Utc::now(),
            message,
            total_items: self.settings.total_items,
            completed_items: tally.completed,
            errors: tally.errors.clone(),
            failures: tally.failures.clone(),
        }
    }

    async fn send(&self, update: ProgressUpdate) {
        let response = self.http.post(&self.url).json(&update).send().await;
        match response.and_then(|r| r.error_for_status()) {
            Ok(_) => debug!("Progress update sent: {}", update.message),
            Err(e) => warn!("Failed to send progress update to {}: {}", self.url, e),
        }
    }
}

#[async_trait]
impl ProgressReporter for SonobuoyProgressReporter {
    async fn start_test(&self, name: &str) {
        // The guard is held across the send so updates leave in tally order
        let tally = self.tally.lock().await;
        let update = self.update(format!("Test started: {}", name), &tally);
        self.send(update).await;
    }

    async fn stop_test(&self, name: &str, failed: bool, skipped: bool, error: Option<&str>) {
        let mut tally = self.tally.lock().await;
        tally.completed += 1;
        if failed {
            tally.failures.push(name.to_string());
        }
        if let Some(error) = error {
            tally.errors.push(format!("{}: {}", name, error));
        }
        let status = match (failed, skipped) {
            (true, _) => "failed",
            (false, true) => "skipped",
            (false, false) => "passed",
        };
        let update = self.update(format!("Test {}: {}", status, name), &tally);
        self.send(update).await;
    }
}
