//! Tests for the demonstration flow

use pmtask::core::models::{ApiResponse, Me};
use pmtask::core::services::{DemoOptions, FlowError, run_demo, verify_identity};

use crate::common::mocks::{StubApi, task};

fn run(api: &StubApi, options: &DemoOptions) -> (Result<(), FlowError>, String) {
    let mut out = Vec::new();
    let result = run_demo(api, options, &mut out).map(|_| ());
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_zero_tasks_stops_before_creating_anything() {
    let api = StubApi::new();
    let (result, output) = run(&api, &DemoOptions::default());

    let err = result.unwrap_err();
    assert!(matches!(err, FlowError::NoRecords));
    assert_eq!(err.to_string(), "No records found matching this query.");
    assert!(output.contains("Logged in as Ada Lovelace (ada@example.com)"));
    assert!(!api.called("create_"));
}

#[test]
fn test_tasks_are_listed_then_project_created() {
    let api = StubApi::new().with_tasks(vec![
        task("t1", "AB-1", "Plan"),
        task("t2", "AB-2", "Build"),
    ]);
    let (result, output) = run(&api, &DemoOptions::default());

    result.unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Logged in as Ada Lovelace (ada@example.com)");
    assert_eq!(lines[1], "Testing against client stub");
    assert_eq!(lines[2], "Task 0: AB-1 Plan");
    assert_eq!(lines[3], "Task 1: AB-2 Build");
    assert!(lines[4].starts_with("Result: "));
    assert!(lines[4].contains("\"success\":true"));
    assert!(!lines[4].contains("null"));

    assert_eq!(
        api.calls(),
        vec!["retrieve_me", "query_tasks:", "create_project:New Project - pmtask"]
    );
}

#[test]
fn test_listing_honours_page_size() {
    let tasks = (0..15).map(|n| task(&format!("t{n}"), &format!("AB-{n}"), "x")).collect();
    let api = StubApi::new().with_tasks(tasks);

    let mut out = Vec::new();
    let report = run_demo(&api, &DemoOptions::default(), &mut out).unwrap();
    assert_eq!(report.tasks.len(), 10);
}

#[test]
fn test_bulk_creation_sends_three_sample_tasks() {
    let api = StubApi::new().with_tasks(vec![task("t1", "AB-1", "Plan")]);
    let options = DemoOptions {
        bulk_project: Some("proj-9".to_string()),
        ..DemoOptions::default()
    };

    let mut out = Vec::new();
    let report = run_demo(&api, &options, &mut out).unwrap();

    assert!(api.called("create_many_tasks:proj-9:3"));
    let names: Vec<String> = report
        .bulk
        .and_then(|b| b.data)
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["First Task", "Second Task", "Third Task"]);
}

#[test]
fn test_failed_creation_is_reported_not_fatal() {
    let api = StubApi::new()
        .with_tasks(vec![task("t1", "AB-1", "Plan")])
        .failing_creates();
    let (result, output) = run(&api, &DemoOptions::default());

    result.unwrap();
    assert!(output.contains("\"success\":false"));
    assert!(output.contains("create disabled"));
}

#[test]
fn test_rejected_key_is_authentication_error() {
    let api = StubApi::new().with_me(ApiResponse::<Me>::failed("Invalid API key"));
    let (result, output) = run(&api, &DemoOptions::default());

    let err = result.unwrap_err();
    assert!(matches!(err, FlowError::Authentication(ref m) if m == "Invalid API key"));
    assert!(err.to_string().contains("Your API key is not valid"));
    assert!(output.is_empty());
    assert_eq!(api.calls(), vec!["retrieve_me"]);
}

#[test]
fn test_verify_identity_returns_me() {
    let me = verify_identity(&StubApi::new()).unwrap();
    assert_eq!(me.full_name, "Ada Lovelace");
    assert_eq!(me.work_space_name.as_deref(), Some("Engines"));
}
