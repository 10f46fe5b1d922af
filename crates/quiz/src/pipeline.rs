//! Quiz response pipeline
//!
//! Turns raw LLM output into a well-formed set of quiz questions. The model
//! is asked for a bare JSON array but routinely wraps it in prose, fences it
//! in markdown, or drops fields; this module extracts, validates, and repairs
//! what it can and degrades to synthetic placeholder questions otherwise.
//! The pipeline never errors: the quiz path is fallback-safe end to end.

use cerebell_common::{CerebellError, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

use crate::types::{QuizOutcome, QuizQuestion, OPTION_COUNT};

/// Matches the first JSON-array-of-objects substring in free text
fn array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Non-greedy so trailing prose after the array is not swallowed
        Regex::new(r"(\[\s*\{[\s\S]*?\}\s*\])").expect("quiz array pattern is valid")
    })
}

/// Question shape as emitted by the model, before repair
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: Option<String>,
}

/// Isolate the JSON candidate from raw model output
///
/// Falls back to the entire text when no array-of-objects substring is found.
fn extract_candidate(raw: &str) -> &str {
    match array_pattern().find(raw) {
        Some(m) => m.as_str(),
        None => raw,
    }
}

/// Check the parsed value against the required quiz shape
fn validate(quiz_data: &Value) -> Result<()> {
    let questions = quiz_data
        .as_array()
        .ok_or_else(|| CerebellError::validation("Quiz data must be a list of questions"))?;

    for q in questions {
        let obj = q
            .as_object()
            .ok_or_else(|| CerebellError::validation("Each question must be an object"))?;

        for key in ["question", "options", "correct_answer"] {
            if !obj.contains_key(key) {
                return Err(CerebellError::validation(format!(
                    "Missing required field '{}' in quiz question",
                    key
                )));
            }
        }

        let options = obj["options"]
            .as_array()
            .ok_or_else(|| CerebellError::validation("'options' must be a list"))?;
        if options.len() != OPTION_COUNT {
            return Err(CerebellError::validation(
                "Each question must have exactly 4 options",
            ));
        }
    }

    Ok(())
}

/// Parse, validate, and repair the extracted candidate
fn parse_candidate(candidate: &str, num_questions: usize) -> Result<Vec<QuizQuestion>> {
    let quiz_data: Value = serde_json::from_str(candidate)?;
    validate(&quiz_data)?;

    let raw_questions: Vec<RawQuestion> = serde_json::from_value(quiz_data)
        .map_err(|e| CerebellError::validation(format!("Malformed question field: {}", e)))?;

    // Truncate to the requested count; a shorter quiz is accepted as-is
    let questions = raw_questions
        .into_iter()
        .take(num_questions)
        .map(|raw| {
            // Missing or blank explanations are synthesized from the answer
            let explanation = raw
                .explanation
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| format!("The correct answer is {}.", raw.correct_answer));
            QuizQuestion {
                question: raw.question,
                options: raw.options,
                correct_answer: raw.correct_answer,
                explanation,
            }
        })
        .collect();

    Ok(questions)
}

/// Synthetic placeholder quiz used when the model output is unusable
pub fn fallback_quiz(subject: &str, topic: &str, num_questions: usize) -> Vec<QuizQuestion> {
    warn!("Using fallback quiz for {}", subject);

    (0..num_questions)
        .map(|i| QuizQuestion {
            question: format!("Sample question on {} in {} #{}", topic, subject, i + 1),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answer: "Option A".to_string(),
            explanation: "This is a fallback explanation.".to_string(),
        })
        .collect()
}

/// Parse raw LLM output into a quiz of at most `num_questions` questions
///
/// Any extraction, parse, or validation failure degrades to fallback
/// generation; the result always satisfies the quiz invariants.
pub fn parse_quiz_response(
    raw: &str,
    subject: &str,
    topic: &str,
    num_questions: usize,
) -> QuizOutcome {
    debug!("Raw LLM response: {}", raw);

    let candidate = extract_candidate(raw);

    match parse_candidate(candidate, num_questions) {
        Ok(questions) => QuizOutcome::Generated(questions),
        Err(e) => {
            error!("Quiz parsing failed: {}", e);
            QuizOutcome::Fallback(fallback_quiz(subject, topic, num_questions))
        }
    }
}
