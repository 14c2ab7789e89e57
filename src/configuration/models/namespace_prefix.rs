
use crate::configuration::environment_source::EnvironmentSource;
use log::warn;
use std::fmt::{Display, Formatter};

pub const NAMESPACE_PREFIX_KEY: &str = "NS_PREFIX";
pub const DEFAULT_NAMESPACE_PREFIX: &str = "dr-conformance";
pub const MAX_NAMESPACE_PREFIX_LENGTH: usize = 200;

/// Prefix shared by every namespace created during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePrefix(String);

impl NamespacePrefix {
    /// Empty or oversized values are replaced by the default prefix
    pub fn resolve(value: Option<String>) -> Self {
        match value {
            Some(prefix) if !prefix.is_empty() && prefix.len() <= MAX_NAMESPACE_PREFIX_LENGTH => NamespacePrefix(prefix),
            other => {
                warn!(
                    "Namespace prefix {:?} is empty or too long, will use '{}' instead",
                    other.unwrap_or_default(),
                    DEFAULT_NAMESPACE_PREFIX
                );
                NamespacePrefix(DEFAULT_NAMESPACE_PREFIX.to_string())
            }
        }
    }

    pub fn from_env(source: &dyn EnvironmentSource) -> Self {
        Self::resolve(source.lookup(NAMESPACE_PREFIX_KEY))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NamespacePrefix {
    fn default() -> Self {
        NamespacePrefix(DEFAULT_NAMESPACE_PREFIX.to_string())
    }
}

impl Display for NamespacePrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
