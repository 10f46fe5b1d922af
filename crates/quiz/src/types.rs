use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of answer options every question must carry
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text
    pub question: String,

    /// Exactly four answer options, in presentation order
    pub options: Vec<String>,

    /// The correct option's text (best effort; may drift from `options`)
    pub correct_answer: String,

    /// Explanation shown after reveal
    pub explanation: String,
}

impl QuizQuestion {
    /// Index of the correct answer within `options`
    ///
    /// Models occasionally emit a `correct_answer` that matches none of the
    /// options. Rendering must not fail on that, so the index defaults to 0;
    /// the drift is logged as a data-quality signal.
    pub fn correct_index(&self) -> usize {
        match self.options.iter().position(|o| o == &self.correct_answer) {
            Some(idx) => idx,
            None => {
                warn!(
                    "correct_answer '{}' not found among options; defaulting to index 0",
                    self.correct_answer
                );
                0
            }
        }
    }
}

/// Result of the quiz response pipeline
///
/// Tagged so callers and tests can tell real model output from synthetic
/// fallback content without inspecting string markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizOutcome {
    /// Questions parsed from genuine model output
    Generated(Vec<QuizQuestion>),

    /// Synthetic placeholder questions produced after a failure
    Fallback(Vec<QuizQuestion>),
}

impl QuizOutcome {
    /// The questions, regardless of origin
    pub fn questions(&self) -> &[QuizQuestion] {
        match self {
            Self::Generated(qs) | Self::Fallback(qs) => qs,
        }
    }

    /// Consume the outcome, yielding the questions
    pub fn into_questions(self) -> Vec<QuizQuestion> {
        match self {
            Self::Generated(qs) | Self::Fallback(qs) => qs,
        }
    }

    /// Whether fallback generation was used
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
