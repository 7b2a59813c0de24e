mod common;

use axum::http::StatusCode;
use std::fs;
use tower::ServiceExt;

use common::{get_request, parse_response_body, test_app_with_plugin_dir};

fn write_descriptor(dir: &tempfile::TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[tokio::test]
async fn list_should_return_sorted_descriptor_names() {
    let dir = tempfile::tempdir().unwrap();
    write_descriptor(&dir, "web.yaml", "name: web\n");
    write_descriptor(&dir, "ping.yaml", "name: ping\n");
    write_descriptor(&dir, "README.md", "not a plugin\n");

    let app = test_app_with_plugin_dir(dir.path().to_path_buf()).await;

    let response = app.oneshot(get_request("/api/plugins")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response.into_body()).await;
    assert_eq!(body, serde_json::json!(["ping", "web"]));
}

#[tokio::test]
async fn get_should_return_descriptor_as_json() {
    let dir = tempfile::tempdir().unwrap();
    write_descriptor(
        &dir,
        "ping.yaml",
        "name: ping\ndescription: ICMP echo check\nparams:\n  count:\n    default: 5\n",
    );

    let app = test_app_with_plugin_dir(dir.path().to_path_buf()).await;

    let response = app.oneshot(get_request("/api/plugins/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response.into_body()).await;
    assert_eq!(body["name"], "ping");
    assert_eq!(body["params"]["count"]["default"], 5);
}

#[tokio::test]
async fn get_unknown_plugin_should_return_404() {
    let dir = tempfile::tempdir().unwrap();

    let app = test_app_with_plugin_dir(dir.path().to_path_buf()).await;

    let response = app.oneshot(get_request("/api/plugins/nope")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response.into_body()).await;
    assert_eq!(body["error"], "plugin 'nope' not found");
}

#[tokio::test]
async fn traversal_name_should_not_escape_plugin_dir() {
    let root = tempfile::tempdir().unwrap();
    let plugin_dir = root.path().join("plugins");
    fs::create_dir(&plugin_dir).unwrap();
    fs::write(root.path().join("outside.yaml"), "name: outside\n").unwrap();

    let app = test_app_with_plugin_dir(plugin_dir).await;

    let response = app
        .oneshot(get_request("/api/plugins/..%2Foutside"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response.into_body()).await;
    assert_eq!(body["error"], "plugin '../outside' not found");
}

#[tokio::test]
async fn bundled_descriptors_should_be_served() {
    // Uses the real plugins/ directory shipped with the repo
    let app = common::test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/plugins"))
        .await
        .unwrap();
    let body = parse_response_body(response.into_body()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(names.contains(&"ping"));
    assert!(names.contains(&"web"));

    let response = app.oneshot(get_request("/api/plugins/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response.into_body()).await;
    assert_eq!(body["name"], "ping");
}
