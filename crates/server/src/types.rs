use actix_web::HttpResponse;
use cerebell_common::{CerebellError, Level};
use cerebell_quiz::QuizQuestion;
use serde::{Deserialize, Serialize};

/// Tutoring response body
#[derive(Debug, Serialize)]
pub struct TutorResponse {
    /// Formatted tutoring explanation
    pub response: String,
}

/// Quiz generation request body
#[derive(Debug, Deserialize)]
pub struct QuizGenRequest {
    /// Academic subject
    pub subject: String,

    /// Topic within the subject
    pub topic: String,

    /// Learning level
    pub level: Level,

    /// Requested number of questions
    pub num_questions: usize,

    /// Whether to include the formatted reveal-mode HTML
    ///
    /// The original UI sends this as `reveal_format`.
    #[serde(default = "default_reveal", alias = "reveal_format")]
    pub reveal_answer: bool,
}

fn default_reveal() -> bool {
    true
}

/// Quiz generation response body
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// Parsed (or fallback) quiz questions
    pub quiz_data: Vec<QuizQuestion>,

    /// Interactive HTML document, present when reveal was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_quiz: Option<String>,
}

/// Quiz export request body
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Questions to render and write
    pub quiz_data: Vec<QuizQuestion>,

    /// Target path, resolved against the configured export directory
    #[serde(default = "default_export_path")]
    pub file_path: String,
}

fn default_export_path() -> String {
    "quiz.html".to_string()
}

/// Quiz export response body
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Whether the file was written
    pub success: bool,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Optional detail string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Map an internal error to a JSON error response
pub fn error_response(message: &str, err: &CerebellError) -> HttpResponse {
    let status = actix_web::http::StatusCode::from_u16(err.status_code())
        .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        error: message.to_string(),
        details: Some(err.to_string()),
    })
}
