#[cfg(test)]
mod tests;

use crate::services::backends::NamespaceClient;
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Namespace client that keeps namespaces in memory.
/// Used to exercise the suite without a cluster.
pub struct InMemoryNamespaceClient {
    namespaces: RwLock<HashSet<String>>,
    history: RwLock<Vec<NamespaceOperation>>,
    failing_creates: AtomicUsize,
    failing_deletes: AtomicUsize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceOperation {
    Created(String),
    Deleted(String),
}

impl InMemoryNamespaceClient {
    pub fn new() -> Self {
        InMemoryNamespaceClient {
            namespaces: RwLock::new(HashSet::new()),
            history: RwLock::new(Vec::new()),
            failing_creates: AtomicUsize::new(0),
            failing_deletes: AtomicUsize::new(0),
        }
    }

    /// The next `count` create requests fail without creating anything
    pub fn fail_next_creates(&self, count: usize) {
        self.failing_creates.store(count, Ordering::SeqCst);
    }

    /// The next `count` delete requests fail and leave the namespace in place
    pub fn fail_next_deletes(&self, count: usize) {
        self.failing_deletes.store(count, Ordering::SeqCst);
    }

    /// Namespaces that currently exist, sorted by name
    pub async fn namespaces(&self) -> Vec<String> {
        let read_guard = self.namespaces.read().await;
        let mut names: Vec<String> = (*read_guard).iter().cloned().collect();
        names.sort();
        names
    }

    /// Successful operations in the order they were applied
    pub async fn history(&self) -> Vec<NamespaceOperation> {
        self.history.read().await.clone()
    }

    pub async fn created(&self) -> Vec<String> {
        self.history()
            .await
            .into_iter()
            .filter_map(|op| match op {
                NamespaceOperation::Created(name) => Some(name),
                NamespaceOperation::Deleted(_) => None,
            })
            .collect()
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.history()
            .await
            .into_iter()
            .filter_map(|op| match op {
                NamespaceOperation::Deleted(name) => Some(name),
                NamespaceOperation::Created(_) => None,
            })
            .collect()
    }
}

impl Default for InMemoryNamespaceClient {
    fn default() -> Self {
        Self::new()
    }
}

fn take_failure(counter: &AtomicUsize) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| remaining.checked_sub(1))
        .is_ok()
}

#[async_trait]
impl NamespaceClient for InMemoryNamespaceClient {
    async fn create(&self, name: &str) -> anyhow::Result<()> {
        if take_failure(&self.failing_creates) {
            bail!("Injected failure while creating namespace {}", name);
        }
        let mut write_guard = self.namespaces.write().await;
        if !(*write_guard).insert(name.to_string()) {
            bail!("Namespace {} already exists", name);
        }
        self.history.write().await.push(NamespaceOperation::Created(name.to_string()));
        Ok(())
    }

    async fn delete(&self, name: &str) -> anyhow::Result<()> {
        if take_failure(&self.failing_deletes) {
            bail!("Injected failure while deleting namespace {}", name);
        }
        let mut write_guard = self.namespaces.write().await;
        if !(*write_guard).remove(name) {
            bail!("Namespace {} not found", name);
        }
        self.history.write().await.push(NamespaceOperation::Deleted(name.to_string()));
        Ok(())
    }
}
