//! Cerebell HTTP Server
//!
//! Actix-web REST API consumed by the tutoring UI

pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod testutil;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use cerebell_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server with the given configuration
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config));

    info!("Starting Cerebell server on {}", bind_address);

    HttpServer::new(move || {
        // The UI runs on a different origin than the API
        let cors = Cors::permissive();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .service(routes::tutor::tutor)
            .service(routes::quiz::quiz)
            .service(routes::export::export)
    })
    .bind(&bind_address)
    .map_err(|e| {
        cerebell_common::CerebellError::config(format!(
            "Failed to bind {}: {}",
            bind_address, e
        ))
    })?
    .run()
    .await?;

    Ok(())
}
