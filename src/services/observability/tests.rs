use super::composed_logger;
use log::{Level, Log, Metadata};

fn metadata(level: Level, target: &str) -> Metadata<'_> {
    Metadata::builder().level(level).target(target).build()
}

#[test]
fn test_module_directive_raises_only_that_module() {
    let logger = composed_logger(Some("dr_conformance=debug"));

    assert!(logger.enabled(&metadata(Level::Debug, "dr_conformance::services::lifecycle")));
    assert!(!logger.enabled(&metadata(Level::Debug, "kube::client")));
    assert!(!logger.enabled(&metadata(Level::Trace, "dr_conformance::services::lifecycle")));
}

#[test]
fn test_default_level_with_module_override() {
    let logger = composed_logger(Some("warn,kube=debug"));

    assert!(logger.enabled(&metadata(Level::Debug, "kube::client")));
    assert!(logger.enabled(&metadata(Level::Warn, "dr_conformance")));
    assert!(!logger.enabled(&metadata(Level::Info, "dr_conformance")));
}

#[test]
fn test_plain_level_directive() {
    let logger = composed_logger(Some("debug"));

    assert!(logger.enabled(&metadata(Level::Debug, "hyper")));
    assert!(!logger.enabled(&metadata(Level::Trace, "hyper")));
}

#[test]
fn test_info_without_directives() {
    let logger = composed_logger(None);

    assert!(logger.enabled(&metadata(Level::Info, "dr_conformance")));
    assert!(!logger.enabled(&metadata(Level::Debug, "dr_conformance")));
}
