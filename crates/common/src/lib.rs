pub mod config;
pub mod error;
pub mod logger;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::CerebellError;
pub use types::{LearningStyle, Level, TutoringRequest};
pub type Result<T> = std::result::Result<T, CerebellError>;
