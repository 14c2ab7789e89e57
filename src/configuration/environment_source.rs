use std::collections::HashMap;

/// Source of configuration values keyed by environment variable name
pub trait EnvironmentSource: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;

    fn lookup_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }
}

/// Reads values from the environment of the current process
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvironmentSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
