//! Prompt templates for tutoring and quiz generation

use cerebell_common::{CerebellError, Level, Result, TutoringRequest};

/// Build the tutoring prompt from learner preferences
///
/// Pure string construction; fails only on empty input fields.
pub fn tutoring_prompt(req: &TutoringRequest) -> Result<String> {
    req.validate()?;

    Ok(format!(
        r#"You are an expert AI tutor. Help the student learn the following topic based on their preferences.

Subject: {subject}
Learning Level: {level}
User's Question: {question}
Preferred Learning Style: {style}
Background Knowledge: {background}
Language: {language}

Instructions:
1. Respond clearly and concisely in {language}.
2. Tailor the explanation to a {level} learner.
3. Adapt to the user's learning style:
   - If 'Visual', describe with diagrams, examples, or flowcharts (describe them in text).
   - If 'Text-based', explain using step-by-step written logic.
   - If 'Hands-on', include interactive exercises or simple tasks to try.
4. Avoid technical jargon unless it's appropriate for the user's background.
5. End with a quick quiz or summary to reinforce the key idea.

Start your response now:
"#,
        subject = req.subject,
        level = req.level,
        question = req.question,
        style = req.learning_style,
        background = req.background,
        language = req.language,
    ))
}

/// Build the quiz-generation prompt
///
/// Instructs the model to emit only a JSON array, no prose or markdown fencing.
pub fn quiz_prompt(subject: &str, topic: &str, level: Level, num_questions: usize) -> Result<String> {
    if subject.trim().is_empty() {
        return Err(CerebellError::invalid_input("Field 'subject' cannot be empty"));
    }
    if topic.trim().is_empty() {
        return Err(CerebellError::invalid_input("Field 'topic' cannot be empty"));
    }
    if num_questions == 0 {
        return Err(CerebellError::invalid_input(
            "num_questions must be positive",
        ));
    }

    Ok(format!(
        r#"You are a professional educational content creator. Generate a quiz on the following:

Subject: {subject}
Topic: {topic}
Learning Level: {level}
Number of Questions: {n}

Instructions:
1. Create {n} multiple-choice questions (MCQs) that thoroughly cover all key subtopics and concepts within the topic of "{topic}" under the subject "{subject}".
2. Each question should:
   - Match the {level} level of difficulty.
   - Test understanding of a different part of the topic.
   - Include 4 answer options (A, B, C, D) with only one correct answer.
   - Include the correct answer key and a brief explanation.
3. Questions should avoid repetition and increase in complexity where possible.
4. Keep language clear and concise.

Output Format:
Return only a valid JSON array with the following structure for each question:
[
  {{
    "question": "...",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_answer": "Option A",
    "explanation": "..."
  }}
]
Do not include any extra commentary or markdown formatting.
"#,
        subject = subject,
        topic = topic,
        level = level,
        n = num_questions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerebell_common::LearningStyle;

    fn sample_request() -> TutoringRequest {
        TutoringRequest {
            subject: "Physics".to_string(),
            level: Level::Intermediate,
            question: "Explain Newton's Second Law of Motion.".to_string(),
            learning_style: LearningStyle::HandsOn,
            background: "Some Knowledge".to_string(),
            language: "Spanish".to_string(),
        }
    }

    #[test]
    fn test_tutoring_prompt_embeds_all_fields() {
        let req = sample_request();
        let prompt = tutoring_prompt(&req).unwrap();

        assert!(prompt.contains("Physics"));
        assert!(prompt.contains("Intermediate"));
        assert!(prompt.contains("Explain Newton's Second Law of Motion."));
        assert!(prompt.contains("Hands-on"));
        assert!(prompt.contains("Some Knowledge"));
        assert!(prompt.contains("Respond clearly and concisely in Spanish"));
    }

    #[test]
    fn test_tutoring_prompt_rejects_empty_field() {
        let mut req = sample_request();
        req.subject = String::new();
        assert!(tutoring_prompt(&req).is_err());
    }

    #[test]
    fn test_quiz_prompt_embeds_parameters() {
        let prompt = quiz_prompt("Mathematics", "Algebra", Level::Beginner, 5).unwrap();

        assert!(prompt.contains("Subject: Mathematics"));
        assert!(prompt.contains("Topic: Algebra"));
        assert!(prompt.contains("Learning Level: Beginner"));
        assert!(prompt.contains("Number of Questions: 5"));
        assert!(prompt.contains("valid JSON array"));
    }

    #[test]
    fn test_quiz_prompt_rejects_bad_input() {
        assert!(quiz_prompt("", "Algebra", Level::Beginner, 5).is_err());
        assert!(quiz_prompt("Math", " ", Level::Beginner, 5).is_err());
        assert!(quiz_prompt("Math", "Algebra", Level::Beginner, 0).is_err());
    }
}
