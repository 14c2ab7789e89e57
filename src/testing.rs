#[cfg(test)]
mod tests;

use crate::configuration::environment_source::ProcessEnvironment;
use crate::configuration::models::conformance_settings::ConformanceSettings;
use crate::configuration::models::namespace_prefix::NamespacePrefix;
use crate::services::naming::RunId;
use crate::services::test_environment::TestEnvironment;
use std::sync::OnceLock;

pub mod recording_progress_reporter;
pub mod temp_namespace_context;

static RUN_ID: OnceLock<RunId> = OnceLock::new();

/// Run identifier of the test binary, generated by the first caller.
/// Later callers get the same identifier whatever prefix they pass.
pub fn shared_run_id(prefix: &NamespacePrefix) -> RunId {
    RUN_ID.get_or_init(|| RunId::generate(prefix)).clone()
}

/// Builds a test environment from the process environment and connects to the cluster.
/// Every environment built here belongs to the run of the test binary. Each test still
/// gets its own client since a client is bound to the runtime of the test that built it.
/// COVERAGE: disabled since this is a testing helper
#[cfg_attr(coverage, coverage(off))]
pub async fn connect() -> anyhow::Result<TestEnvironment> {
    let settings = ConformanceSettings::from_env(&ProcessEnvironment)?;
    let run_id = shared_run_id(&settings.namespace_prefix);
    Ok(TestEnvironment::setup_for_run(settings, run_id).await?)
}
