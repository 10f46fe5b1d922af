use async_trait::async_trait;
use cerebell_common::{AppConfig, CerebellError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::ChatClient;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// OpenAI chat-completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

impl OpenAiClient {
    /// Create a client from application configuration
    ///
    /// Fails with a configuration error when no API key is present.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or_else(|| CerebellError::config("OPENAI_API_KEY is not set"))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| CerebellError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "OpenAI client initialized: model={}, base_url={}",
            config.llm_model, config.openai_base_url
        );

        Ok(Self {
            base_url: config.openai_base_url.clone(),
            api_key,
            model: config.llm_model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Single chat-completion attempt
    ///
    /// No retries: a failed provider call is terminal for the request.
    async fn try_complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: Some(self.temperature),
        };

        debug!(
            "Sending chat request - Model: {}, Prompt length: {}",
            request.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CerebellError::provider(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| CerebellError::provider(format!("Chat API error: {}", e)))?;

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| CerebellError::provider(format!("Failed to parse response: {}", e)))?;

        let content = result
            .content()
            .ok_or_else(|| CerebellError::provider("Response contained no choices"))?;

        debug!("Received chat response - Length: {}", content.len());

        Ok(content)
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.try_complete(prompt).await
    }
}
