use super::{InMemoryNamespaceClient, NamespaceOperation};
use crate::services::backends::NamespaceClient;

#[tokio::test]
async fn test_create_and_delete_namespace() {
    let client = InMemoryNamespaceClient::new();

    client.create("ns-a").await.unwrap();
    assert_eq!(client.namespaces().await, vec!["ns-a".to_string()]);

    client.delete("ns-a").await.unwrap();
    assert!(client.namespaces().await.is_empty());
    assert_eq!(
        client.history().await,
        vec![
            NamespaceOperation::Created("ns-a".to_string()),
            NamespaceOperation::Deleted("ns-a".to_string())
        ]
    );
}

#[tokio::test]
async fn test_duplicate_create_is_rejected() {
    let client = InMemoryNamespaceClient::new();
    client.create("ns-a").await.unwrap();

    let error = client.create("ns-a").await.unwrap_err();

    assert_eq!(error.to_string(), "Namespace ns-a already exists");
    assert_eq!(client.created().await, vec!["ns-a".to_string()]);
}

#[tokio::test]
async fn test_delete_of_unknown_namespace_fails() {
    let client = InMemoryNamespaceClient::new();
    let error = client.delete("missing").await.unwrap_err();
    assert_eq!(error.to_string(), "Namespace missing not found");
}

#[tokio::test]
async fn test_injected_failures_are_consumed() {
    let client = InMemoryNamespaceClient::new();
    client.fail_next_creates(1);
    client.fail_next_deletes(1);

    assert!(client.create("ns-a").await.is_err());
    client.create("ns-a").await.unwrap();

    assert!(client.delete("ns-a").await.is_err());
    assert_eq!(client.namespaces().await, vec!["ns-a".to_string()]);
    client.delete("ns-a").await.unwrap();

    assert_eq!(client.deleted().await, vec!["ns-a".to_string()]);
}
