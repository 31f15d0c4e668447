//! Tests for the HTTP adapter against a mock server

use pmtask::Error;
use pmtask::adapters::http::HttpProjectManager;
use pmtask::config::Environment;
use pmtask::core::models::{CommentCreate, ProjectCreate, TaskCreate, TaskQuery};
use pmtask::core::ports::ProjectManagerApi;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::server::{TestServer, me_json};

fn client(server: &TestServer) -> HttpProjectManager {
    HttpProjectManager::builder()
        .environment(Environment::Custom(server.uri()))
        .api_key("test-key")
        .app_name("unit-tests")
        .build()
        .unwrap()
}

#[test]
fn test_retrieve_me_sends_bearer_and_app_name() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/data/me"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("applicationname", "unit-tests"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": me_json()})),
            ),
    );

    let me = client(&server).retrieve_me().unwrap().into_data().unwrap();
    assert_eq!(me.full_name, "Ada Lovelace");
    assert_eq!(me.email_address, "ada@example.com");
}

#[test]
fn test_query_tasks_sends_odata_params() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/data/tasks"))
            .and(query_param("$top", "10"))
            .and(query_param("$filter", "(ShortId eq 'AB-1')"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"id": "t1", "shortId": "AB-1", "name": "Plan", "wbs": "1.1"}]
            }))),
    );

    let query = TaskQuery {
        top: Some(10),
        ..TaskQuery::filtered("(ShortId eq 'AB-1')")
    };
    let tasks = client(&server).query_tasks(&query).unwrap().data.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].wbs.as_deref(), Some("1.1"));
}

#[test]
fn test_unauthorized_maps_to_auth_error() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/data/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "error": {"message": "Invalid API key"}
            }))),
    );

    let err = client(&server).retrieve_me().unwrap_err();
    assert!(matches!(err, Error::Auth(ref m) if m == "Invalid API key"));
}

#[test]
fn test_server_error_maps_to_server() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/data/projects"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom")),
    );

    let err = client(&server).query_projects(&TaskQuery::default()).unwrap_err();
    assert!(matches!(err, Error::Server(ref m) if m == "boom"));
}

#[test]
fn test_create_project_posts_payload() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/data/projects"))
            .and(body_json(json!({"name": "Apollo", "description": "Moon"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"id": "p-1", "shortId": "APO", "name": "Apollo"}
            }))),
    );

    let project = client(&server)
        .create_project(&ProjectCreate::new("Apollo", Some("Moon")))
        .unwrap();
    assert!(project.success);
    assert_eq!(project.data.unwrap().short_id.as_deref(), Some("APO"));
}

#[test]
fn test_bulk_create_posts_array() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/data/projects/p-1/tasks/bulk"))
            .and(body_json(json!([
                {"name": "First Task", "description": "Description"},
                {"name": "Second Task"}
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"id": "t1", "name": "First Task"}, {"id": "t2", "name": "Second Task"}]
            }))),
    );

    let tasks = [
        TaskCreate::new("First Task", Some("Description")),
        TaskCreate::new("Second Task", None),
    ];
    let response = client(&server).create_many_tasks("p-1", &tasks).unwrap();
    assert_eq!(response.data.unwrap().len(), 2);
}

#[test]
fn test_empty_body_is_success_without_data() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/data/tasks/t1"))
            .respond_with(ResponseTemplate::new(204)),
    );

    let response = client(&server).delete_task("t1").unwrap();
    assert!(response.success);
    assert!(response.data.is_none());
}

#[test]
fn test_failed_envelope_is_returned_not_raised() {
    let server = TestServer::start();
    server.ok("GET", "/api/data/tasks/t1/comments", json!([]));
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/data/tasks/t1/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": {"message": "Comments are disabled"}
            }))),
    );

    let api = client(&server);
    assert!(api.retrieve_task_comments("t1").unwrap().data.unwrap().is_empty());

    let response = api
        .create_task_comment("t1", &CommentCreate {
            text: "hi".to_string(),
        })
        .unwrap();
    assert!(!response.success);
    assert_eq!(response.error_message(), "Comments are disabled");
}

#[test]
fn test_connection_refused_is_network_error() {
    let api = HttpProjectManager::builder()
        .environment(Environment::Custom("http://127.0.0.1:9".to_string()))
        .api_key("k")
        .build()
        .unwrap();
    assert!(matches!(api.retrieve_me(), Err(Error::Network(_))));
}

#[test]
fn test_ids_are_percent_encoded_in_the_path() {
    let server = TestServer::start();
    server.mount(Mock::given(method("DELETE")).respond_with(ResponseTemplate::new(204)));
    server.mount(Mock::given(method("POST")).respond_with(ResponseTemplate::new(204)));

    let api = client(&server);
    api.delete_task("a b/../c").unwrap();
    api.create_many_tasks("p?1#x", &[TaskCreate::new("First Task", None)]).unwrap();

    assert_eq!(
        server.request_paths(),
        vec![
            "DELETE /api/data/tasks/a%20b%2F..%2Fc",
            "POST /api/data/projects/p%3F1%23x/tasks/bulk"
        ]
    );
}

#[test]
fn test_base_url_path_is_kept() {
    let server = TestServer::start();
    server.ok("GET", "/tenant/api/data/me", me_json());

    let api = HttpProjectManager::builder()
        .environment(Environment::Custom(format!("{}/tenant/", server.uri())))
        .api_key("k")
        .build()
        .unwrap();
    assert!(api.retrieve_me().unwrap().success);
}

#[test]
fn test_null_fields_in_listing_do_not_fail_the_response() {
    let server = TestServer::start();
    server.ok(
        "GET",
        "/api/data/tasks",
        json!([
            {"id": "t1", "shortId": null, "name": null},
            {"id": "t2", "shortId": "AB-2", "name": "Build"}
        ]),
    );

    let tasks = client(&server).query_tasks(&TaskQuery::top(10)).unwrap().data.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].name, "");
    assert_eq!(tasks[1].short_id, "AB-2");
}
