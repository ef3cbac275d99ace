use std::time::Duration;

use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::HeaderValue;
use axum::http::header::AUTHORIZATION;
use axum::routing::{any, get};
use tokio::net::TcpListener;

use super::*;
use crate::config::ProxyTimeouts;
use crate::routes::api_routes;

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://up:8001", "jobs", None), "http://up:8001/api/jobs");
    assert_eq!(
        upstream_url("http://up:8001/", "users", Some("country=Kenya&skill=rust")),
        "http://up:8001/api/users?country=Kenya&skill=rust"
    );
    assert_eq!(upstream_url("http://up", "/projects/p1", Some("")), "http://up/api/projects/p1");
}

#[test]
fn api_subpath_keeps_percent_escapes() {
    let uri: Uri = "/api/projects/a%2Fb%3Fc?x=1".parse().unwrap();
    assert_eq!(api_subpath(&uri), "projects/a%2Fb%3Fc");
    let bare: Uri = "/healthz".parse().unwrap();
    assert_eq!(api_subpath(&bare), "/healthz");
}

#[test]
fn forwarded_headers_keeps_allow_list_only() {
    let mut incoming = HeaderMap::new();
    incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer t1"));
    incoming.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert("idempotency-key", HeaderValue::from_static("k-1"));
    incoming.insert("cookie", HeaderValue::from_static("session=secret"));
    incoming.insert("host", HeaderValue::from_static("portal.test"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer t1");
    assert_eq!(out.get("idempotency-key").unwrap(), "k-1");
    assert!(out.get("cookie").is_none());
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Unavailable.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::TimedOut.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::TimedOut.to_string(), "upstream timed out");
}

// =============================================================================
// END TO END
// =============================================================================

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Upstream that echoes what it received as JSON.
async fn echo(
    method: Method,
    uri: Uri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    Path(path): Path<String>,
    body: String,
) -> Json<serde_json::Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(serde_json::json!({
        "method": method.as_str(),
        "path": path,
        "raw_path": uri.path(),
        "query": query,
        "authorization": header("authorization"),
        "idempotency_key": header("idempotency-key"),
        "cookie": header("cookie"),
        "body": body,
    }))
}

async fn unauthorized() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "detail": "Could not validate credentials" })))
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}

async fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/api/profile", get(unauthorized))
        .route("/api/slow", get(slow))
        .route("/api/{*path}", any(echo));
    serve(router).await
}

async fn spawn_proxy(api_url: &str, request_secs: u64) -> String {
    let state = AppState::new(api_url, ProxyTimeouts { request_secs, connect_secs: 1 }).unwrap();
    serve(api_routes(state)).await
}

#[tokio::test]
async fn forwards_method_path_query_headers_and_body() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, 5).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/jobs/j1/apply?source=portal"))
        .header("authorization", "Bearer abc")
        .header("idempotency-key", "key-1")
        .header("cookie", "tracking=1")
        .header("content-type", "application/json")
        .body(r#"{"job_id":"j1"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "application/json");
    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "jobs/j1/apply");
    assert_eq!(echoed["query"], "source=portal");
    assert_eq!(echoed["authorization"], "Bearer abc");
    assert_eq!(echoed["idempotency_key"], "key-1");
    assert!(echoed["cookie"].is_null());
    assert_eq!(echoed["body"], r#"{"job_id":"j1"}"#);
}

#[tokio::test]
async fn encoded_separators_reach_upstream_unchanged() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, 5).await;

    let resp = reqwest::get(format!("{proxy}/api/projects/a%2Fb%3Fc?x=1")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["raw_path"], "/api/projects/a%2Fb%3Fc");
    assert_eq!(echoed["query"], "x=1");
}

#[tokio::test]
async fn relays_upstream_errors_verbatim() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, 5).await;

    let resp = reqwest::get(format!("{proxy}/api/profile")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let proxy = spawn_proxy(&dead, 5).await;

    let resp = reqwest::get(format!("{proxy}/api/jobs")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "upstream unavailable");
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let upstream = spawn_upstream().await;
    let proxy = spawn_proxy(&upstream, 1).await;

    let resp = reqwest::get(format!("{proxy}/api/slow")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "upstream timed out");
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn_proxy("http://127.0.0.1:9", 1).await;
    let resp = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
