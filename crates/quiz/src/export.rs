use std::path::Path;
use tracing::{error, info};

use crate::format::format_quiz_with_reveal;
use crate::types::QuizQuestion;

/// Write the rendered quiz HTML to a file
///
/// I/O failures are logged and reported as `false`, never propagated.
pub fn export_quiz_to_html(questions: &[QuizQuestion], file_path: &Path) -> bool {
    let html = format_quiz_with_reveal(questions);

    match std::fs::write(file_path, html) {
        Ok(()) => {
            info!("Quiz exported successfully to {}", file_path.display());
            true
        }
        Err(e) => {
            error!("Error exporting quiz to HTML: {}", e);
            false
        }
    }
}
