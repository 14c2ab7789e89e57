use crate::services::backends::NamespaceClient;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{DeleteParams, PostParams};
use kube::{Api, Client};
use log::debug;
use maplit::btreemap;

pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
pub const MANAGED_BY_VALUE: &str = "dr-conformance";

/// Namespace client backed by the Kubernetes API server
pub struct KubernetesNamespaceClient {
    api: Api<Namespace>,
}

impl KubernetesNamespaceClient {
    pub fn new(client: Client) -> Self {
        KubernetesNamespaceClient { api: Api::all(client) }
    }
}

pub(crate) fn namespace_definition(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(btreemap! {
                MANAGED_BY_LABEL.to_string() => MANAGED_BY_VALUE.to_string(),
            }),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[async_trait]
impl NamespaceClient for KubernetesNamespaceClient {
    async fn create(&self, name: &str) -> anyhow::Result<()> {
        self.api.create(&PostParams::default(), &namespace_definition(name)).await?;
        debug!("Namespace {} created", name);
        Ok(())
    }

    async fn delete(&self, name: &str) -> anyhow::Result<()> {
        self.api.delete(name, &DeleteParams::default()).await?;
        debug!("Namespace {} deletion requested", name);
        Ok(())
    }
}
