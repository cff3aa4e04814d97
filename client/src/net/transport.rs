//! HTTP transport seam between typed API calls and the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `BrowserTransport` reports
//! [`ApiError::Unavailable`]; tests substitute a scripted transport.

#![allow(clippy::unused_async)]

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the backend base URL.
///
/// `body` is JSON text, serialized once so field order reaches the wire as declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_owned(), body: None }
    }

    #[must_use]
    pub fn post(path: &str, body: Option<String>) -> Self {
        Self { method: Method::Post, path: path.to_owned(), body }
    }
}

/// Raw status + body; decoding happens one layer up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and yields whatever the backend answered.
///
/// Futures are not `Send` because browser fetch handles live on the JS thread.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives at all.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport rooted at a base URL.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url_for(&request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            let sent = match request.body {
                Some(body) => {
                    builder
                        .header("Content-Type", "application/json")
                        .body(body)
                        .map_err(|e| ApiError::Transport(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
