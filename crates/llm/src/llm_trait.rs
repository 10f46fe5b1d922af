use async_trait::async_trait;
use cerebell_common::Result;

/// Common trait for chat-completion clients
///
/// The tutoring and quiz paths only ever need a prompt-in, text-out call,
/// so the provider wire shapes stay behind this boundary. Substitutable
/// with a stub client in tests.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a prompt and return the raw generated text
    async fn complete(&self, prompt: &str) -> Result<String>;
}
