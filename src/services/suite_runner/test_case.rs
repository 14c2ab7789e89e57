use crate::configuration::models::target_environment::{TargetEnvironment, is_test_applicable};
use futures::FutureExt;
use futures::future::BoxFuture;
use kube::Client;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::Arc;

pub type TestBody = Arc<dyn Fn(TestContext) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Everything a test body needs to know about the namespace it owns
#[derive(Clone)]
pub struct TestContext {
    test_name: String,
    namespace: String,
    client: Option<Client>,
}

impl TestContext {
    pub fn new(test_name: &str, namespace: &str, client: Option<Client>) -> Self {
        TestContext {
            test_name: test_name.to_string(),
            namespace: namespace.to_string(),
            client,
        }
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

/// Returned by a test body that decides at runtime it has nothing to check
#[derive(Debug)]
pub struct SkipTest(pub String);

impl Display for SkipTest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Test skipped: {}", self.0)
    }
}

impl Error for SkipTest {}

pub struct TestCase {
    name: String,
    body: TestBody,
    skip_on_restricted: bool,
}

impl TestCase {
    pub fn new<F, Fut>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        TestCase {
            name: name.into(),
            body: Arc::new(move |context: TestContext| body(context).boxed()),
            skip_on_restricted: false,
        }
    }

    /// The test is skipped on managed control planes that restrict cluster access (AKS, GCP)
    pub fn skip_on_restricted_environments(mut self) -> Self {
        self.skip_on_restricted = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_applicable(&self, target: TargetEnvironment) -> bool {
        !self.skip_on_restricted || is_test_applicable(&[target])
    }

    pub fn call(&self, context: TestContext) -> BoxFuture<'static, anyhow::Result<()>> {
        (self.body)(context)
    }
}
