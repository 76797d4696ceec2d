//! Router harness shared by the HTTP tests.

#![allow(dead_code)]

use std::thread;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pantry_config::{FeedConfig, YummlyConfig};
use pantry_db::service::PantryService;
use pantry_server::{AppState, create_router};
use pantry_yummly::YummlyClient;
use serde_json::Value;
use tower::ServiceExt;

/// Router over an in-memory database whose Yummly base URL is `yummly_url`.
pub async fn app_with_yummly(yummly_url: &str) -> Router {
    let service = PantryService::new_local(":memory:").await.unwrap();
    let yummly = YummlyClient::new(&YummlyConfig {
        api_key: "test-key".into(),
        base_url: yummly_url.into(),
        timeout_secs: 2,
        ..Default::default()
    })
    .unwrap();
    create_router(AppState::new(service, yummly, FeedConfig::default()))
}

/// Router whose Yummly calls go nowhere useful.
pub async fn app() -> Router {
    app_with_yummly("http://127.0.0.1:9").await
}

/// Send one request and decode the JSON response body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// GET `uri` and return the raw response, headers included.
pub async fn get_raw(app: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Register `username` and return `(user_id, token)`.
pub async fn register(app: &Router, username: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/users",
        None,
        Some(serde_json::json!({ "username": username })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    (
        body["user"]["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

/// Create a recipe as `token` and return its id.
pub async fn publish(app: &Router, token: &str, title: &str, category: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/recipes",
        Some(token),
        Some(serde_json::json!({ "title": title, "category": category })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

/// Local stand-in for the Yummly API answering every request with `status`
/// and `body`. Returns its base URL.
pub fn mock_yummly(status: u16, body: &'static str) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    format!("http://127.0.0.1:{port}")
}
