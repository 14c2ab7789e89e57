
pub mod kubeconfig_loader;
pub mod kubernetes_namespace_client;
