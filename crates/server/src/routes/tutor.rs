use actix_web::{post, web, HttpResponse};
use cerebell_common::{CerebellError, TutoringRequest};
use cerebell_llm::tutoring_prompt;
use cerebell_quiz::format_tutoring_response;
use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;
use crate::types::{error_response, TutorResponse};

/// POST /tutor - Generate a personalized tutoring explanation
#[post("/tutor")]
pub async fn tutor(
    req: web::Json<TutoringRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    let req = req.into_inner();

    let prompt = match tutoring_prompt(&req) {
        Ok(prompt) => prompt,
        Err(e) => return error_response("Invalid tutoring request", &e),
    };

    let client = match &state.client {
        Some(client) => client,
        None => {
            let e = CerebellError::config("LLM client is not configured");
            error!("Tutoring request rejected: {}", e);
            return error_response("Failed to generate tutoring response", &e);
        }
    };

    info!(
        "Generating tutoring response for subject: {}, level: {}",
        req.subject, req.level
    );

    match client.complete(&prompt).await {
        Ok(content) => HttpResponse::Ok().json(TutorResponse {
            response: format_tutoring_response(&content, req.learning_style),
        }),
        Err(e) => {
            error!("Error generating tutoring response: {}", e);
            error_response("Failed to generate tutoring response", &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{failing_state, state_with_response, state_without_client};
    use actix_web::{test, App};
    use serde_json::json;

    fn tutor_body() -> serde_json::Value {
        json!({
            "subject": "Physics",
            "level": "Beginner",
            "question": "Explain Newton's Second Law of Motion.",
            "learning_style": "Visual",
            "background": "Some Knowledge",
            "language": "English"
        })
    }

    #[actix_web::test]
    async fn test_tutor_success_appends_style_note() {
        let state = state_with_response("Force equals mass times acceleration.");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(tutor),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/tutor")
            .set_json(tutor_body())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let response = body["response"].as_str().unwrap();
        assert!(response.starts_with("Force equals mass times acceleration."));
        assert!(response.contains("Visualize these concepts"));
        assert!(response.ends_with("* Happy Learning!*"));
    }

    #[actix_web::test]
    async fn test_tutor_provider_failure_returns_error_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(failing_state()))
                .service(tutor),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/tutor")
            .set_json(tutor_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 502);
    }

    #[actix_web::test]
    async fn test_tutor_without_client_returns_error_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_without_client()))
                .service(tutor),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/tutor")
            .set_json(tutor_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);
    }

    #[actix_web::test]
    async fn test_tutor_rejects_empty_question() {
        let state = state_with_response("irrelevant");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(tutor),
        )
        .await;

        let mut body = tutor_body();
        body["question"] = json!("");
        let req = test::TestRequest::post()
            .uri("/tutor")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }
}
