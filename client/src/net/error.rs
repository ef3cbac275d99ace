//! REST error taxonomy shared by every API call site.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx responses and undecodable bodies are kept
//! apart so views can decide between a generic message, the server's
//! `detail`, or a forced logout.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown for any transport-level failure on a user-initiated action.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Errors produced by `net::api` calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error. Please try again.")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response from server: {0}")]
    Decode(String),

    /// HTTP calls are only made from the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a server error from a status and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = detail_message(body).unwrap_or_else(|| fallback_detail(status));
        Self::Server { status, detail }
    }

    /// The bearer token was rejected; the session must end.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// HTTP status for server errors; `None` for transport and decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract a human-readable `detail` from a JSON error body.
///
/// Accepts both the plain-string form (`{"detail": "..."}`) and the
/// validation-list form (`{"detail": [{"msg": "..."}, ...]}`).
pub fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}

fn fallback_detail(status: u16) -> String {
    match status {
        401 => "Authentication failed".to_owned(),
        404 => "Not found".to_owned(),
        _ => format!("request failed: {status}"),
    }
}
