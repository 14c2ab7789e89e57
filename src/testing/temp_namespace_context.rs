
use crate::services::lifecycle::{TestNamespace, TestOutcome};
use crate::services::test_environment::TestEnvironment;
use crate::testing::connect;
use log::error;
use std::cell::Cell;
use std::panic;
use std::sync::Once;
use test_context::AsyncTestContext;

thread_local! {
    static PANICKED: Cell<bool> = const { Cell::new(false) };
}

static PANIC_TRACKING: Once = Once::new();

/// Chains a panic hook that marks the panicking thread.
/// The test body runs on the libtest thread, and `test_context` catches its panic
/// before teardown, so the mark is the only trace of a failed assertion.
fn track_panics() {
    PANIC_TRACKING.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            PANICKED.with(|panicked| panicked.set(true));
            previous(info);
        }));
    });
}

/// Outcome of the test body on the current thread since the last call
fn take_outcome() -> TestOutcome {
    if PANICKED.with(|panicked| panicked.replace(false)) {
        TestOutcome::failed()
    } else {
        TestOutcome::passed()
    }
}

/// Gives a test its own namespace in the cluster selected by the process environment.
/// The namespace is deleted when the test context is torn down, and the test is reported
/// failed when its body panicked.
pub struct TempNamespaceContext {
    pub environment: TestEnvironment,
    pub namespace: String,
    test_namespace: TestNamespace,
}

impl AsyncTestContext for TempNamespaceContext {
    async fn setup() -> Self {
        track_panics();
        let environment = connect().await.expect("Failed to connect to the cluster");
        // libtest names the thread after the test being executed
        let test_name = std::thread::current().name().unwrap_or("test_context").to_string();
        let test_namespace = environment
            .lifecycle()
            .before_test(&test_name)
            .await
            .expect("Failed to create namespace");
        take_outcome();
        TempNamespaceContext {
            namespace: test_namespace.namespace().to_string(),
            environment,
            test_namespace,
        }
    }

    async fn teardown(self) {
        let TempNamespaceContext {
            environment,
            test_namespace,
            ..
        } = self;
        if let Err(e) = environment
            .lifecycle()
            .after_test(test_namespace, take_outcome())
            .await
        {
            error!("{}", e);
        }
        environment.teardown().await;
    }
}
