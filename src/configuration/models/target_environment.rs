#[cfg(test)]
mod tests;

use crate::configuration::environment_source::EnvironmentSource;
use std::fmt::{Display, Formatter};

pub const TARGET_ENVIRONMENT_KEY: &str = "K8S_ENVIRONMENT";
pub const DEFAULT_TARGET_ENVIRONMENT: &str = "EKS";

/// The Kubernetes distribution the suite runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetEnvironment {
    OnPrem,
    Eks,
    Aks,
    Gcp,
}

impl TargetEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetEnvironment::OnPrem => "on-prem",
            TargetEnvironment::Eks => "EKS",
            TargetEnvironment::Aks => "AKS",
            TargetEnvironment::Gcp => "GCP",
        }
    }

    /// Unknown tags select an on-prem cluster
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "EKS" => TargetEnvironment::Eks,
            "AKS" => TargetEnvironment::Aks,
            "GCP" => TargetEnvironment::Gcp,
            _ => TargetEnvironment::OnPrem,
        }
    }

    pub fn from_env(source: &dyn EnvironmentSource) -> Self {
        Self::from_tag(&source.lookup_or(TARGET_ENVIRONMENT_KEY, DEFAULT_TARGET_ENVIRONMENT))
    }

    /// Managed control planes that do not allow every conformance test to run
    pub fn is_restricted(&self) -> bool {
        matches!(self, TargetEnvironment::Aks | TargetEnvironment::Gcp)
    }
}

impl Display for TargetEnvironment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns false if any of the given environments is restricted
pub fn is_test_applicable(environments: &[TargetEnvironment]) -> bool {
    !environments.iter().any(TargetEnvironment::is_restricted)
}
