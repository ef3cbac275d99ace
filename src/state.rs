//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single pooled `reqwest::Client` the API proxy forwards through
//! and the upstream base URL. Clone is cheap: both fields are shared handles.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, ProxyTimeouts};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`StateError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(api_url: &str, timeouts: ProxyTimeouts) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_url: Arc::from(api_url.trim_end_matches('/')) })
    }

    /// # Errors
    ///
    /// See [`AppState::new`].
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        Self::new(&config.api_url, config.timeouts)
    }
}
