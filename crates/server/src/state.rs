use cerebell_common::AppConfig;
use cerebell_llm::{ChatClient, OpenAiClient};
use std::sync::Arc;
use tracing::warn;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Chat client, absent when no credential is configured
    ///
    /// A missing client is a hard failure for tutoring but not for the quiz
    /// path, which degrades to fallback generation.
    pub client: Option<Arc<dyn ChatClient>>,
}

impl AppState {
    /// Create application state, building the LLM client from configuration
    pub fn new(config: AppConfig) -> Self {
        let client = match OpenAiClient::from_config(&config) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn ChatClient>),
            Err(e) => {
                warn!("LLM client unavailable: {}", e);
                None
            }
        };

        Self { config, client }
    }

    /// Create application state with an explicit client (used in tests)
    pub fn with_client(config: AppConfig, client: Option<Arc<dyn ChatClient>>) -> Self {
        Self { config, client }
    }
}
