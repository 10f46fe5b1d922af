use crate::error::CerebellError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cerebell application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenAI API key; missing key defers failure to client construction
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// Chat-completions API base URL
    pub openai_base_url: String,

    /// Chat model name
    pub llm_model: String,

    /// Sampling temperature for tutoring and quiz generation
    pub temperature: f32,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Base directory for relative quiz export paths
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            llm_model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, CerebellError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            temperature: std::env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.7),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            export_dir: Self::get_env_path("EXPORT_DIR").unwrap_or_else(|| PathBuf::from(".")),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Resolve an export path against the configured export directory
    pub fn resolve_export_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.export_dir.join(path)
        }
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CerebellError> {
        if self.llm_model.is_empty() {
            return Err(CerebellError::config("LLM model name cannot be empty"));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(CerebellError::config(
                "OpenAI base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(CerebellError::config("Server port cannot be 0"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CerebellError::config(
                "Temperature must be between 0.0 and 2.0",
            ));
        }

        Ok(())
    }
}
