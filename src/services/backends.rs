use async_trait::async_trait;

pub mod kubernetes;
pub mod memory;

#[async_trait]
/// Creates and deletes cluster scoped namespaces
pub trait NamespaceClient: Send + Sync {
    /// Issues a single create request for a namespace with the given name
    async fn create(&self, name: &str) -> anyhow::Result<()>;

    /// Issues a single delete request for the namespace with the given name
    async fn delete(&self, name: &str) -> anyhow::Result<()>;
}
