//! Same-origin proxy for the upstream AfriCore REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/...` on this host; each request is replayed
//! against `{api_url}/api/...` with the same method, raw path, query string
//! and body.
//! Only the headers the API cares about are forwarded.
//!
//! ERROR HANDLING
//! ==============
//! Upstream HTTP errors (401, 404, 422, ...) are relayed verbatim so the
//! client sees the API's own `detail`. Transport failures become 502 and
//! timeouts 504, both with a `{"detail": ...}` body in the API's shape.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers copied onto the upstream request.
pub const FORWARDED_HEADERS: [&str; 3] = ["authorization", "content-type", "idempotency-key"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProxyError {
    #[error("upstream unavailable")]
    Unavailable,
    #[error("upstream timed out")]
    TimedOut,
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unavailable => StatusCode::BAD_GATEWAY,
            Self::TimedOut => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::TimedOut } else { Self::Unavailable }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Upstream URL for `/api/{path}` with an optional raw query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Path below `/api/` exactly as the client sent it, percent-escapes intact.
pub fn api_subpath(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix("/api/").unwrap_or(path)
}

/// Keep only [`FORWARDED_HEADERS`] from the incoming request.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = incoming.get(name) {
            out.insert(HeaderName::from_static(name), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request upstream and relay the answer.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.api_url, api_subpath(&uri), uri.query());

    let mut request = state.http.request(method.clone(), &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "proxy request failed");
        ProxyError::from_reqwest(&e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "proxy response body failed");
        ProxyError::from_reqwest(&e)
    })?;

    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
