//! Scripted in-memory transport for exercising API flows without a browser.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Replays queued outcomes in order and records every request it sees.
/// An exhausted queue answers `503`.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, body: &str) -> Self {
        self.reply(200, body)
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse { status, body: body.to_owned() }))
    }

    pub fn offline(self) -> Self {
        self.push(Err(ApiError::Transport("connection refused".to_owned())))
    }

    fn push(self, outcome: Result<ApiResponse, ApiError>) -> Self {
        self.replies.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<(Method, String)> {
        self.requests().into_iter().map(|r| (r.method, r.path)).collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 503, body: String::new() }))
    }
}
