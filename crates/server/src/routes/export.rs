use actix_web::{post, web, HttpResponse};
use cerebell_quiz::export_quiz_to_html;
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{ExportRequest, ExportResponse};

/// POST /export - Write the rendered quiz HTML to a file
///
/// Export failure is reported in-band as `success: false`, never as an
/// HTTP error.
#[post("/export")]
pub async fn export(
    req: web::Json<ExportRequest>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    let req = req.into_inner();
    let path = state.config.resolve_export_path(&req.file_path);

    let success = export_quiz_to_html(&req.quiz_data, &path);

    HttpResponse::Ok().json(ExportResponse { success })
}
