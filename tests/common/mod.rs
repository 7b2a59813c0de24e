#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

use mntr_server::config::{establish_connection, AppConfig};
use mntr_server::state::AppState;

/// App over a fresh in-memory database and the repo's `plugins/` dir.
pub async fn test_app() -> Router {
    test_app_with_plugin_dir(PathBuf::from("plugins")).await
}

/// App over a fresh in-memory database and an arbitrary plugin dir.
pub async fn test_app_with_plugin_dir(plugin_dir: PathBuf) -> Router {
    let db = establish_connection("sqlite::memory:")
        .await
        .expect("in-memory database should open");

    let config = AppConfig {
        server_port: 0,
        database_file: ":memory:".to_string(),
        plugin_dir,
    };

    mntr_server::app(AppState { db, config })
}

pub async fn parse_response_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn response_body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
