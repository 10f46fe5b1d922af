//! Cerebell LLM Integration
//!
//! OpenAI chat-completions client and prompt builders

mod client;
mod llm_trait;
mod prompts;
mod types;

pub use client::OpenAiClient;
pub use llm_trait::ChatClient;
pub use prompts::{quiz_prompt, tutoring_prompt};
pub use types::{ChatMessage, ChatRequest, ChatResponse};
