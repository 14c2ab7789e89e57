use super::{TargetEnvironment, is_test_applicable};
use std::collections::HashMap;

#[test]
fn test_unset_variable_selects_eks() {
    let source: HashMap<String, String> = HashMap::new();
    assert_eq!(TargetEnvironment::from_env(&source), TargetEnvironment::Eks);
}

#[test]
fn test_known_tags() {
    for env in [TargetEnvironment::Eks, TargetEnvironment::Aks, TargetEnvironment::Gcp] {
        assert_eq!(TargetEnvironment::from_tag(env.as_str()), env);
    }
}

#[test]
fn test_unknown_tag_falls_back_to_on_prem() {
    let source = HashMap::from([("K8S_ENVIRONMENT".to_string(), "kind".to_string())]);
    assert_eq!(TargetEnvironment::from_env(&source), TargetEnvironment::OnPrem);
    // Tags are case sensitive
    assert_eq!(TargetEnvironment::from_tag("eks"), TargetEnvironment::OnPrem);
}

#[test]
fn test_gcp_has_its_own_tag() {
    assert_eq!(TargetEnvironment::Gcp.to_string(), "GCP");
    assert_ne!(TargetEnvironment::Gcp.as_str(), TargetEnvironment::OnPrem.as_str());
}

#[test]
fn test_applicability() {
    assert!(is_test_applicable(&[]));
    assert!(is_test_applicable(&[TargetEnvironment::Eks, TargetEnvironment::OnPrem]));
    assert!(!is_test_applicable(&[TargetEnvironment::Eks, TargetEnvironment::Aks]));
    assert!(!is_test_applicable(&[TargetEnvironment::Gcp]));
}
