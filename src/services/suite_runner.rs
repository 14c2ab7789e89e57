pub mod suite_report;
pub mod test_case;

use crate::services::lifecycle::TestOutcome;
use crate::services::suite_runner::suite_report::{SuiteReport, TestResult, TestStatus};
use crate::services::suite_runner::test_case::{SkipTest, TestCase, TestContext};
use crate::services::test_environment::TestEnvironment;
use futures::FutureExt;
use futures::future::join_all;
use log::{error, info, warn};
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Ordered collection of conformance tests
#[derive(Default)]
pub struct ConformanceSuite {
    tests: Vec<TestCase>,
}

impl ConformanceSuite {
    pub fn new() -> Self {
        Self { tests: Vec::new() }
    }

    pub fn with_test(mut self, test: TestCase) -> Self {
        self.tests.push(test);
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Runs every test inside its own namespace and aggregates the results
    pub async fn run(&self, environment: &TestEnvironment) -> SuiteReport {
        let results = if environment.settings().parallel {
            join_all(self.tests.iter().map(|test| run_test(test, environment))).await
        } else {
            let mut results = Vec::with_capacity(self.tests.len());
            for test in &self.tests {
                results.push(run_test(test, environment).await);
            }
            results
        };
        let report = SuiteReport::new(results);
        info!(
            "Run {} completed: {} passed, {} failed, {} skipped",
            environment.run_id(),
            report.passed(),
            report.failed(),
            report.skipped()
        );
        report
    }
}

async fn run_test(test: &TestCase, environment: &TestEnvironment) -> TestResult {
    let name = test.name();

    if !test.is_applicable(environment.target_environment()) {
        info!("Skipping test {} on {} environment", name, environment.target_environment());
        let reporter = environment.lifecycle().reporter();
        reporter.start_test(name).await;
        reporter.stop_test(name, false, true, None).await;
        return TestResult::new(name, TestStatus::Skipped);
    }

    let test_namespace = match environment.lifecycle().before_test(name).await {
        Ok(test_namespace) => test_namespace,
        Err(e) => {
            error!("{}", e);
            return TestResult::new(name, TestStatus::Failed).with_failure(e.to_string());
        }
    };
    let namespace = test_namespace.namespace().to_string();

    let context = TestContext::new(name, &namespace, environment.client().cloned());
    let (status, failure) = match AssertUnwindSafe(test.call(context)).catch_unwind().await {
        Ok(Ok(())) => (TestStatus::Passed, None),
        Ok(Err(e)) => match e.downcast_ref::<SkipTest>() {
            Some(skip) => (TestStatus::Skipped, Some(skip.to_string())),
            None => (TestStatus::Failed, Some(format!("{:#}", e))),
        },
        Err(panic) => (TestStatus::Failed, Some(panic_message(panic.as_ref()))),
    };
    if status == TestStatus::Failed {
        warn!("Test {} failed: {}", name, failure.as_deref().unwrap_or_default());
    }

    let outcome = TestOutcome {
        failed: status == TestStatus::Failed,
        skipped: status == TestStatus::Skipped,
    };
    let mut result = TestResult::new(name, status).with_namespace(namespace);
    if let Some(failure) = failure {
        result = result.with_failure(failure);
    }
    if let Err(e) = environment.lifecycle().after_test(test_namespace, outcome).await {
        result = result.with_teardown_error(e.to_string());
    }
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("Test panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("Test panicked: {}", message)
    } else {
        "Test panicked".to_string()
    }
}
