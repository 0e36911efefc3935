//! Headless mode end to end, against a scripted analysis service

use pyfix::run_headless;
use pyfix_app::config::Settings;
use pyfix_app::Engine;
use pyfix_client::test_utils::{sample_result, MockAnalysisService};
use serde_json::Value;
use tempfile::tempdir;

async fn run(service: MockAnalysisService, file: &std::path::Path) -> (bool, Vec<Value>) {
    let engine = Engine::new(Settings::default(), service);
    let mut out = Vec::new();
    let succeeded = run_headless(engine, file, &mut out).await.unwrap();

    let events = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is one JSON object"))
        .collect();
    (succeeded, events)
}

fn event_names(events: &[Value]) -> Vec<&str> {
    events.iter().map(|e| e["event"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_successful_analysis_emits_result() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("calc.py");
    std::fs::write(&path, "def add(a, b):\n    return a + b\n").unwrap();
    let service = MockAnalysisService::succeeding(sample_result());

    let (succeeded, events) = run(service.clone(), &path).await;

    assert!(succeeded);
    assert_eq!(
        event_names(&events),
        vec!["file_selected", "analysis_started", "analysis_completed"]
    );
    assert_eq!(events[0]["file"], "calc.py");
    assert_eq!(events[1]["endpoint"], "mock://analysis");
    assert_eq!(events[2]["result"]["syntax_check"], "OK");
    assert_eq!(service.uploaded_names(), vec!["calc.py".to_string()]);
}

#[tokio::test]
async fn test_wrong_extension_never_uploads() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("notes.txt");
    std::fs::write(&path, "not python").unwrap();
    let service = MockAnalysisService::succeeding(sample_result());

    let (succeeded, events) = run(service.clone(), &path).await;

    assert!(!succeeded);
    assert_eq!(event_names(&events), vec!["error"]);
    assert_eq!(events[0]["message"], "Please select a Python (.py) file");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn test_missing_file_reports_read_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.py");

    let (succeeded, events) = run(MockAnalysisService::refusing(), &path).await;

    assert!(!succeeded);
    assert_eq!(event_names(&events), vec!["error"]);
    assert!(events[0]["message"]
        .as_str()
        .unwrap()
        .starts_with("Could not read"));
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("calc.py");
    std::fs::write(&path, "x = 1\n").unwrap();
    let service = MockAnalysisService::failing_with_status("500 Internal Server Error");

    let (succeeded, events) = run(service.clone(), &path).await;

    assert!(!succeeded);
    assert_eq!(
        event_names(&events),
        vec!["file_selected", "analysis_started", "error"]
    );
    assert!(events[2]["message"].as_str().unwrap().contains("500"));
    assert_eq!(service.call_count(), 1);
}
