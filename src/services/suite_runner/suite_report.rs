#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    /// Namespace the test ran in, None when it never got one
    pub namespace: Option<String>,
    pub failure: Option<String>,
    /// Namespace deletion error, it does not change the status of the test
    pub teardown_error: Option<String>,
}

impl TestResult {
    pub fn new(name: &str, status: TestStatus) -> Self {
        TestResult {
            name: name.to_string(),
            status,
            namespace: None,
            failure: None,
            teardown_error: None,
        }
    }

    pub fn with_namespace(mut self, namespace: String) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn with_failure(mut self, failure: String) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn with_teardown_error(mut self, error: String) -> Self {
        self.teardown_error = Some(error);
        self
    }
}

/// Aggregated results of a suite run, in registration order
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    results: Vec<TestResult>,
}

impl SuiteReport {
    pub fn new(results: Vec<TestResult>) -> Self {
        SuiteReport { results }
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn result(&self, name: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn passed(&self) -> usize {
        self.count(TestStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(TestStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(TestStatus::Skipped)
    }

    pub fn teardown_errors(&self) -> Vec<&str> {
        self.results.iter().filter_map(|r| r.teardown_error.as_deref()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit code of the run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    fn count(&self, status: TestStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}
