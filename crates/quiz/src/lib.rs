//! Cerebell Quiz Engine
//!
//! Quiz response pipeline, response formatters, and HTML export

mod export;
mod format;
mod pipeline;
mod types;

pub use export::export_quiz_to_html;
pub use format::{format_quiz_with_reveal, format_tutoring_response};
pub use pipeline::{fallback_quiz, parse_quiz_response};
pub use types::{QuizOutcome, QuizQuestion, OPTION_COUNT};
