use super::{ProgressUpdate, SonobuoyProgressReporter};
use crate::configuration::models::progress_settings::ProgressSettings;
use crate::services::reporting::ProgressReporter;
use futures::future::join_all;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(total_items: i64) -> ProgressSettings {
    ProgressSettings {
        port: 8099,
        plugin_name: "dr-conformance".to_string(),
        node_name: "node-1".to_string(),
        total_items,
    }
}

async fn progress_endpoint() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/progress"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    mock_server
}

async fn received_updates(mock_server: &MockServer) -> Vec<ProgressUpdate> {
    mock_server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|request| request.body_json::<ProgressUpdate>().expect("body is a progress update"))
        .collect()
}

#[tokio::test]
async fn test_updates_carry_running_tally() {
    let mock_server = progress_endpoint().await;
    let reporter =
        SonobuoyProgressReporter::with_url(format!("{}/progress", mock_server.uri()), settings(2)).unwrap();

    reporter.start_test("A").await;
    reporter.stop_test("A", true, false, Some("namespace creation failed")).await;
    reporter.start_test("B").await;
    reporter.stop_test("B", false, true, None).await;

    let updates = received_updates(&mock_server).await;
    assert_eq!(updates.len(), 4);

    assert_eq!(updates[0].message, "Test started: A");
    assert_eq!(updates[0].completed_items, 0);
    assert_eq!(updates[0].plugin_name, "dr-conformance");
    assert_eq!(updates[0].node, "node-1");
    assert_eq!(updates[0].total_items, 2);

    assert_eq!(updates[1].message, "Test failed: A");
    assert_eq!(updates[1].completed_items, 1);
    assert_eq!(updates[1].failures, vec!["A".to_string()]);
    assert_eq!(updates[1].errors, vec!["A: namespace creation failed".to_string()]);

    assert_eq!(updates[3].message, "Test skipped: B");
    assert_eq!(updates[3].completed_items, 2);
    assert_eq!(updates[3].failures, vec!["A".to_string()]);
}

#[tokio::test]
/// Concurrent completions must reach the sidecar in tally order
async fn test_concurrent_updates_arrive_in_order() {
    let mock_server = progress_endpoint().await;
    let reporter =
        SonobuoyProgressReporter::with_url(format!("{}/progress", mock_server.uri()), settings(16)).unwrap();
    let names: Vec<String> = (0..16).map(|i| format!("test-{}", i)).collect();

    join_all(names.iter().map(|name| reporter.stop_test(name, false, false, None))).await;

    let completed: Vec<i64> = received_updates(&mock_server)
        .await
        .iter()
        .map(|update| update.completed_items)
        .collect();
    assert_eq!(completed, (1..=16).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_rejected_update_is_tolerated() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/progress"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&mock_server)
        .await;
    let reporter =
        SonobuoyProgressReporter::with_url(format!("{}/progress", mock_server.uri()), settings(1)).unwrap();

    reporter.start_test("A").await;
    reporter.stop_test("A", false, false, None).await;

    mock_server.verify().await;
}

#[tokio::test]
/// An unreachable endpoint must not fail the test that is being reported
async fn test_unreachable_endpoint_is_tolerated() {
    let mock_server = MockServer::start().await;
    let url = format!("{}/progress", mock_server.uri());
    drop(mock_server);

    let reporter = SonobuoyProgressReporter::with_url(url, settings(1)).unwrap();

    reporter.start_test("A").await;
    reporter.stop_test("A", false, false, None).await;
}

#[test]
fn test_wire_format() {
    let update = ProgressUpdate {
        plugin_name: "dr-conformance".to_string(),
        node: String::new(),
        timestamp: chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc),
        message: "Test started: A".to_string(),
        total_items: 0,
        completed_items: 0,
        errors: Vec::new(),
        failures: Vec::new(),
    };

    let json = serde_json::to_value(&update).unwrap();

    assert_eq!(json["name"], "dr-conformance");
    assert_eq!(json["msg"], "Test started: A");
    assert_eq!(json["timestamp"], "2024-01-01T00:00:00Z");
    assert!(json.get("errors").is_none());
    assert!(json.get("failures").is_none());
}
