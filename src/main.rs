use anyhow::{Context, ensure};
use dr_conformance::configuration::environment_source::{EnvironmentSource, ProcessEnvironment};
use dr_conformance::configuration::models::conformance_settings::ConformanceSettings;
use dr_conformance::services::observability::{LOG_LEVEL_KEY, init_logging};
use dr_conformance::services::suite_runner::ConformanceSuite;
use dr_conformance::services::suite_runner::test_case::{TestCase, TestContext};
use dr_conformance::services::test_environment::TestEnvironment;
use k8s_openapi::api::core::v1::Namespace;
use kube::Api;
use log::error;
use std::process::ExitCode;

/// Verifies that the namespace handed to a test exists and is active
async fn namespace_is_active(context: TestContext) -> anyhow::Result<()> {
    let client = context.client().context("No cluster client configured")?.clone();
    let namespaces: Api<Namespace> = Api::all(client);
    let namespace = namespaces.get(context.namespace()).await?;
    let phase = namespace.status.and_then(|s| s.phase);
    ensure!(
        phase.as_deref() == Some("Active"),
        "Namespace {} is in phase {:?}",
        context.namespace(),
        phase
    );
    Ok(())
}

fn suite() -> ConformanceSuite {
    ConformanceSuite::new().with_test(TestCase::new("namespace_is_active", namespace_is_active))
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_logging(ProcessEnvironment.lookup(LOG_LEVEL_KEY).as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut settings = match ConformanceSettings::from_env(&ProcessEnvironment) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let suite = suite();
    if let Some(progress) = settings.progress.as_mut() {
        progress.total_items = suite.len() as i64;
    }

    let environment = match TestEnvironment::setup(settings).await {
        Ok(environment) => environment,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = suite.run(&environment).await;
    environment.teardown().await;

    ExitCode::from(report.exit_code() as u8)
}
