mod common;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use common::{get_request, parse_response_body, test_app};

#[tokio::test]
async fn status_should_report_alive() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/api/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response.into_body()).await;
    assert_eq!(body["alive"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptimeSecs"].is_u64());
}

#[tokio::test]
async fn root_should_redirect_to_status() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/status"
    );
}

#[tokio::test]
async fn openapi_document_should_be_served() {
    let app = test_app().await;

    let response = app
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response.into_body()).await;
    assert!(body["paths"]["/api/collectors"].is_object());
    assert!(body["paths"]["/api/monitors/config"].is_object());
}
