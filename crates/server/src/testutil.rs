use async_trait::async_trait;
use cerebell_common::{AppConfig, CerebellError, Result};
use cerebell_llm::ChatClient;
use std::sync::Arc;

use crate::state::AppState;

/// Chat client returning a canned response
pub struct StubClient {
    response: String,
}

#[async_trait]
impl ChatClient for StubClient {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Chat client that always fails with a provider error
pub struct FailingClient;

#[async_trait]
impl ChatClient for FailingClient {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(CerebellError::provider("connection refused"))
    }
}

/// App state whose client answers every prompt with `response`
pub fn state_with_response(response: &str) -> Arc<AppState> {
    Arc::new(AppState::with_client(
        AppConfig::default(),
        Some(Arc::new(StubClient {
            response: response.to_string(),
        })),
    ))
}

/// App state whose client fails every call
pub fn failing_state() -> Arc<AppState> {
    Arc::new(AppState::with_client(
        AppConfig::default(),
        Some(Arc::new(FailingClient)),
    ))
}

/// App state with no client configured
pub fn state_without_client() -> Arc<AppState> {
    Arc::new(AppState::with_client(AppConfig::default(), None))
}
