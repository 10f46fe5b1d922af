use serde::{Deserialize, Serialize};

/// Learning level of the requesting student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Display name used in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred learning style
///
/// Unknown style strings are rejected at deserialization rather than
/// silently treated as a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningStyle {
    Visual,
    #[serde(rename = "Text-based")]
    TextBased,
    #[serde(rename = "Hands-on")]
    HandsOn,
}

impl LearningStyle {
    /// Display name used in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "Visual",
            Self::TextBased => "Text-based",
            Self::HandsOn => "Hands-on",
        }
    }
}

impl std::fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tutoring request from the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutoringRequest {
    /// Academic subject
    pub subject: String,

    /// Learning level
    pub level: Level,

    /// The student's specific question
    pub question: String,

    /// Preferred learning style
    pub learning_style: LearningStyle,

    /// Background knowledge description
    pub background: String,

    /// Preferred response language
    pub language: String,
}

impl TutoringRequest {
    /// Check that all free-text fields are non-empty
    pub fn validate(&self) -> Result<(), crate::CerebellError> {
        for (name, value) in [
            ("subject", &self.subject),
            ("question", &self.question),
            ("background", &self.background),
            ("language", &self.language),
        ] {
            if value.trim().is_empty() {
                return Err(crate::CerebellError::invalid_input(format!(
                    "Field '{}' cannot be empty",
                    name
                )));
            }
        }
        Ok(())
    }
}
