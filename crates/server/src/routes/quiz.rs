use actix_web::{post, web, HttpResponse};
use cerebell_llm::quiz_prompt;
use cerebell_quiz::{fallback_quiz, format_quiz_with_reveal, parse_quiz_response, QuizOutcome};
use std::sync::Arc;
use tracing::{info, warn};

use crate::state::AppState;
use crate::types::{error_response, QuizGenRequest, QuizResponse};

/// POST /quiz - Generate a multiple-choice quiz
///
/// Uniformly fallback-safe: provider failures at any point, including a
/// missing credential, produce a synthetic quiz of the requested length
/// instead of an error.
#[post("/quiz")]
pub async fn quiz(
    req: web::Json<QuizGenRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    let req = req.into_inner();

    let prompt = match quiz_prompt(&req.subject, &req.topic, req.level, req.num_questions) {
        Ok(prompt) => prompt,
        Err(e) => return error_response("Invalid quiz request", &e),
    };

    info!(
        "Generating quiz: {}, {}, {}, {}",
        req.subject, req.topic, req.level, req.num_questions
    );

    let outcome = match &state.client {
        Some(client) => match client.complete(&prompt).await {
            Ok(raw) => parse_quiz_response(&raw, &req.subject, &req.topic, req.num_questions),
            Err(e) => {
                warn!("Quiz generation failed, using fallback: {}", e);
                QuizOutcome::Fallback(fallback_quiz(&req.subject, &req.topic, req.num_questions))
            }
        },
        None => {
            warn!("LLM client is not configured, using fallback quiz");
            QuizOutcome::Fallback(fallback_quiz(&req.subject, &req.topic, req.num_questions))
        }
    };

    let formatted_quiz = req
        .reveal_answer
        .then(|| format_quiz_with_reveal(outcome.questions()));

    HttpResponse::Ok().json(QuizResponse {
        quiz_data: outcome.into_questions(),
        formatted_quiz,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{failing_state, state_with_response, state_without_client};
    use actix_web::{test, App};
    use serde_json::json;

    const MODEL_OUTPUT: &str = r#"Sure! [{"question":"Q1","options":["A","B","C","D"],"correct_answer":"B","explanation":"x"}]"#;

    fn quiz_body(n: usize, reveal: bool) -> serde_json::Value {
        json!({
            "subject": "Math",
            "topic": "Algebra",
            "level": "Beginner",
            "num_questions": n,
            "reveal_format": reveal
        })
    }

    #[actix_web::test]
    async fn test_quiz_parses_model_output() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_response(MODEL_OUTPUT)))
                .service(quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(quiz_body(1, false))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["quiz_data"].as_array().unwrap().len(), 1);
        assert_eq!(body["quiz_data"][0]["correct_answer"], "B");
        assert!(body.get("formatted_quiz").is_none());
    }

    #[actix_web::test]
    async fn test_quiz_reveal_includes_formatted_html() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_response(MODEL_OUTPUT)))
                .service(quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(quiz_body(1, true))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let html = body["formatted_quiz"].as_str().unwrap();
        assert!(html.contains("Interactive Quiz"));
        assert!(html.contains("Q1"));
    }

    #[actix_web::test]
    async fn test_quiz_provider_failure_falls_back() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(failing_state()))
                .service(quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(quiz_body(3, false))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let questions = body["quiz_data"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        for q in questions {
            assert_eq!(q["correct_answer"], "Option A");
        }
    }

    #[actix_web::test]
    async fn test_quiz_without_client_falls_back() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_without_client()))
                .service(quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(quiz_body(2, false))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["quiz_data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_quiz_rejects_zero_questions() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_response(MODEL_OUTPUT)))
                .service(quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_json(quiz_body(0, false))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }
}
