//! Response formatters
//!
//! Tutoring responses get a learning-style-specific closing note; quiz data
//! renders into a self-contained HTML document with reveal interaction.

use cerebell_common::LearningStyle;

use crate::types::QuizQuestion;

const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// Append the closing note for the student's learning style
///
/// Total mapping over the style enum, pure string concatenation.
pub fn format_tutoring_response(content: &str, learning_style: LearningStyle) -> String {
    match learning_style {
        LearningStyle::Visual => format!(
            "{}\n\n* Note: Visualize these concepts as you read for better retention.*\n\n* Happy Learning!*",
            content
        ),
        LearningStyle::HandsOn => format!(
            "{}\n\n* Tip: Try working through the examples yourself to reinforce your learning.*\n\n* Happy Learning!*",
            content
        ),
        LearningStyle::TextBased => format!("{}\n\n* Happy Learning!*", content),
    }
}

/// Render quiz questions into an interactive HTML document
///
/// One `.question` div per question with a hidden answer panel; the embedded
/// script highlights the chosen option and reveals the answer on demand.
/// Deterministic for a given input. Question and option text is interpolated
/// verbatim with no escaping; the output is only as trustworthy as the model
/// text that went in (known XSS-shaped limitation).
pub fn format_quiz_with_reveal(questions: &[QuizQuestion]) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {
            font-family: Arial, sans-serif;
            color: white;
            background-color: #121212;
        }
        .quiz-container {
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }
        .question {
            margin-bottom: 30px;
            padding: 20px;
            border: 1px solid #444;
            border-radius: 10px;
            background-color: #1e1e2f;
        }
        .question h3 {
            margin-top: 0;
            color: #90caf9;
        }
        .options {
            margin-left: 10px;
        }
        .option {
            margin: 10px 0;
            padding: 12px;
            border: 1px solid #555;
            border-radius: 6px;
            cursor: pointer;
            background-color: #2d2d44;
            transition: background-color 0.2s;
        }
        .option:hover {
            background-color: #3a3a5a;
        }
        .reveal-btn {
            background-color: #2196f3;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 5px;
            cursor: pointer;
            font-weight: bold;
            margin-top: 15px;
            transition: background-color 0.2s;
        }
        .reveal-btn:hover {
            background-color: #0d8bf2;
        }
        .answer-section {
            margin-top: 20px;
            border: 2px solid #ffeb3b;
            border-radius: 8px;
            padding: 0;
            overflow: hidden;
            display: none;
        }
        .answer-header {
            background-color: #ffeb3b;
            color: #000;
            padding: 10px;
            font-weight: bold;
            font-size: 16px;
            text-align: center;
        }
        .answer-content {
            padding: 15px;
            background-color: #1a237e;
        }
        .correct-answer {
            font-size: 18px;
            font-weight: bold;
            color: white;
            margin-bottom: 15px;
        }
        .explanation {
            color: #e1f5fe;
            font-size: 16px;
            line-height: 1.5;
        }
        .selected-correct {
            background-color: #1b5e20 !important;
            border-color: #4caf50 !important;
        }
        .selected-incorrect {
            background-color: #b71c1c !important;
            border-color: #f44336 !important;
        }
    </style>
</head>
<body>
    <div class="quiz-container">
        <h2 style="color: #2196f3; text-align: center; margin-bottom: 30px;">Interactive Quiz</h2>
"#,
    );

    for (i, question) in questions.iter().enumerate() {
        let number = i + 1;
        let correct_index = question.correct_index();

        html.push_str(&format!(
            r#"        <div class="question" id="question-{number}">
            <h3>Question {number}</h3>
            <p>{text}</p>
            <div class="options">
"#,
            number = number,
            text = question.question,
        ));

        for (j, option) in question.options.iter().enumerate() {
            let is_correct = j == correct_index;
            html.push_str(&format!(
                r#"                <div class="option" id="option-{number}-{j}" onclick="selectOption({number}, {j}, {is_correct})">
                    <strong>{letter}.</strong> {option}
                </div>
"#,
                number = number,
                j = j,
                is_correct = is_correct,
                letter = OPTION_LETTERS.get(j).copied().unwrap_or("?"),
                option = option,
            ));
        }

        html.push_str(&format!(
            r#"            </div>
            <button class="reveal-btn" onclick="revealAnswer({number})">SHOW ANSWER</button>
            <div class="answer-section" id="answer-{number}">
                <div class="answer-header">CORRECT ANSWER</div>
                <div class="answer-content">
                    <div class="correct-answer">{letter}. {answer}</div>
                    <div class="explanation">{explanation}</div>
                </div>
            </div>
        </div>
"#,
            number = number,
            letter = OPTION_LETTERS.get(correct_index).copied().unwrap_or("?"),
            answer = question.correct_answer,
            explanation = question.explanation,
        ));
    }

    html.push_str(
        r#"    </div>
    <script>
        function selectOption(questionNum, optionNum, isCorrect) {
            const questionId = `question-${questionNum}`;
            const options = document.querySelectorAll(`#${questionId} .option`);

            // Reset all options
            options.forEach(option => {
                option.className = 'option';
            });

            // Highlight selected option
            const selectedOption = document.getElementById(`option-${questionNum}-${optionNum}`);
            if (isCorrect) {
                selectedOption.className = 'option selected-correct';
            } else {
                selectedOption.className = 'option selected-incorrect';
                // Show answer if incorrect
                revealAnswer(questionNum);
            }
        }

        function revealAnswer(questionNum) {
            const answerDiv = document.getElementById(`answer-${questionNum}`);
            answerDiv.style.display = 'block';

            // Scroll to answer
            setTimeout(() => {
                answerDiv.scrollIntoView({ behavior: 'smooth', block: 'nearest' });
            }, 100);

            answerDiv.animate([
                { transform: 'scale(1)', boxShadow: '0 0 0 rgba(255, 235, 59, 0)' },
                { transform: 'scale(1.03)', boxShadow: '0 0 20px rgba(255, 235, 59, 0.7)' },
                { transform: 'scale(1)', boxShadow: '0 0 10px rgba(255, 235, 59, 0.3)' }
            ], {
                duration: 1000,
                iterations: 1
            });
        }
    </script>
</body>
</html>
"#,
    );

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "What is 2 + 2?".to_string(),
            options: vec![
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "6".to_string(),
            ],
            correct_answer: correct.to_string(),
            explanation: "Basic addition.".to_string(),
        }
    }

    #[test]
    fn test_tutoring_format_visual() {
        let formatted = format_tutoring_response("Content.", LearningStyle::Visual);
        assert!(formatted.starts_with("Content."));
        assert!(formatted.contains("Visualize these concepts"));
        assert!(formatted.ends_with("* Happy Learning!*"));
    }

    #[test]
    fn test_tutoring_format_hands_on() {
        let formatted = format_tutoring_response("Content.", LearningStyle::HandsOn);
        assert!(formatted.contains("Try working through the examples"));
        assert!(formatted.ends_with("* Happy Learning!*"));
    }

    #[test]
    fn test_tutoring_format_text_based() {
        let formatted = format_tutoring_response("Content.", LearningStyle::TextBased);
        assert!(!formatted.contains("Note:"));
        assert!(!formatted.contains("Tip:"));
        assert!(formatted.ends_with("* Happy Learning!*"));
    }

    #[test]
    fn test_quiz_html_one_div_per_question() {
        let questions = vec![question("4"), question("4"), question("4")];
        let html = format_quiz_with_reveal(&questions);

        for n in 1..=3 {
            assert!(html.contains(&format!(r#"id="question-{}""#, n)));
            assert!(html.contains(&format!(r#"id="answer-{}""#, n)));
        }
        assert!(html.contains("SHOW ANSWER"));
        assert!(html.contains("selectOption"));
        assert!(html.contains("revealAnswer"));
    }

    #[test]
    fn test_quiz_html_is_deterministic() {
        let questions = vec![question("4")];
        assert_eq!(
            format_quiz_with_reveal(&questions),
            format_quiz_with_reveal(&questions)
        );
    }

    #[test]
    fn test_quiz_html_marks_correct_option() {
        let html = format_quiz_with_reveal(&[question("5")]);
        // "5" is at index 2
        assert!(html.contains("selectOption(1, 2, true)"));
        assert!(html.contains("selectOption(1, 0, false)"));
        assert!(html.contains("<div class=\"correct-answer\">C. 5</div>"));
    }

    #[test]
    fn test_quiz_html_drifted_answer_defaults_to_first_option() {
        let html = format_quiz_with_reveal(&[question("42")]);
        assert!(html.contains("selectOption(1, 0, true)"));
        assert!(html.contains("<div class=\"correct-answer\">A. 42</div>"));
    }

    #[test]
    fn test_quiz_html_empty_quiz_still_renders_shell() {
        let html = format_quiz_with_reveal(&[]);
        assert!(html.contains("Interactive Quiz"));
        assert!(!html.contains(r#"id="question-1""#));
    }
}
