
use crate::configuration::models::namespace_prefix::NamespacePrefix;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Length of the random suffix appended to the run identifier and to each test namespace
pub const RANDOM_SUFFIX_LENGTH: usize = 8;

const MAX_SUFFIX_LENGTH: usize = 32;

/// Appends a random lowercase hex suffix of `suffix_length` characters (1 to 32) to `prefix`
pub fn random_name(prefix: &str, suffix_length: usize) -> String {
    let suffix_length = suffix_length.clamp(1, MAX_SUFFIX_LENGTH);
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &random[..suffix_length])
}

/// Scopes every namespace created during one execution of the suite
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    pub fn generate(prefix: &NamespacePrefix) -> Self {
        RunId(random_name(prefix.as_str(), RANDOM_SUFFIX_LENGTH))
    }

    /// Generates a fresh namespace name for a single test of this run
    pub fn namespace_name(&self) -> String {
        random_name(&self.0, RANDOM_SUFFIX_LENGTH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RunId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
