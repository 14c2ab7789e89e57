use super::ConformanceSettings;
use crate::configuration::models::connection_settings::ConnectionSettings;
use crate::configuration::models::namespace_prefix::DEFAULT_NAMESPACE_PREFIX;
use crate::configuration::models::progress_settings::DEFAULT_PROGRESS_PORT;
use crate::configuration::models::target_environment::TargetEnvironment;
use std::collections::HashMap;

fn source(values: &[(&str, &str)]) -> HashMap<String, String> {
    values.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_defaults() {
    let settings = ConformanceSettings::from_env(&source(&[])).unwrap();

    assert_eq!(settings.target_environment, TargetEnvironment::Eks);
    assert_eq!(settings.namespace_prefix.as_str(), DEFAULT_NAMESPACE_PREFIX);
    assert_eq!(settings.connection, ConnectionSettings::Inferred);
    assert!(settings.progress.is_none());
    assert!(settings.parallel);
}

#[test]
fn test_full_configuration() {
    let settings = ConformanceSettings::from_env(&source(&[
        ("K8S_ENVIRONMENT", "AKS"),
        ("NS_PREFIX", "nightly"),
        ("CONFORMANCE_KUBECONFIG", "/tmp/kubeconfig"),
        ("CONFORMANCE_PARALLEL", "false"),
        ("SONOBUOY_PROGRESS_PORT", "8080"),
        ("SONOBUOY_PLUGIN_NAME", "dr"),
        ("NODE_NAME", "node-1"),
    ]))
    .unwrap();

    assert_eq!(settings.target_environment, TargetEnvironment::Aks);
    assert_eq!(settings.namespace_prefix.as_str(), "nightly");
    assert_eq!(
        settings.connection,
        ConnectionSettings::KubeconfigFile("/tmp/kubeconfig".to_string())
    );
    assert!(!settings.parallel);

    let progress = settings.progress.unwrap();
    assert_eq!(progress.port, 8080);
    assert_eq!(progress.plugin_name, "dr");
    assert_eq!(progress.node_name, "node-1");
    assert_eq!(progress.progress_url(), "http://localhost:8080/progress");
}

#[test]
fn test_connection_precedence() {
    let settings = ConformanceSettings::from_env(&source(&[
        ("CONFORMANCE_KUBECONFIG_COMMAND", "kind get kubeconfig --name kind"),
        ("CONFORMANCE_IN_CLUSTER", "true"),
    ]))
    .unwrap();
    assert_eq!(
        settings.connection,
        ConnectionSettings::KubeconfigCommand("kind get kubeconfig --name kind".to_string())
    );

    let settings = ConformanceSettings::from_env(&source(&[("CONFORMANCE_IN_CLUSTER", "1")])).unwrap();
    assert_eq!(settings.connection, ConnectionSettings::InCluster);
}

#[test]
fn test_empty_progress_port_uses_default() {
    let settings = ConformanceSettings::from_env(&source(&[("SONOBUOY_PROGRESS_PORT", "")])).unwrap();
    assert_eq!(settings.progress.unwrap().port, DEFAULT_PROGRESS_PORT);
}

#[test]
fn test_malformed_values_are_rejected() {
    let error = ConformanceSettings::from_env(&source(&[("CONFORMANCE_PARALLEL", "sometimes")])).unwrap_err();
    assert!(error.to_string().contains("CONFORMANCE_PARALLEL"));

    let error = ConformanceSettings::from_env(&source(&[("SONOBUOY_PROGRESS_PORT", "http")])).unwrap_err();
    assert!(error.to_string().contains("SONOBUOY_PROGRESS_PORT"));
}
