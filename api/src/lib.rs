use std::sync::Arc;

pub mod core;
pub mod error_handler;
pub mod middleware_layer;
mod routes;

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    core::app_state::{ApiConfig, AppState},
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        health::health_route::health,
        interview::{
            coding_question_route::coding_question, evaluate_response_route::evaluate_response,
            next_question_route::next_question, start_interview_route::start_interview,
        },
        knowledge::{sample_questions_route::sample_questions, topics_route::topics},
        sessions::get_session_route::get_session,
    },
};

pub async fn start() -> Result<(), AppError> {
    let config = ApiConfig::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let app = router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %config.address, "interview backend listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// All routes with CORS open to any origin, method and header.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    Router::new()
        .route("/start-interview", post(start_interview))
        .route("/next-question", post(next_question))
        .route("/coding-question", post(coding_question))
        .route("/evaluate-response", post(evaluate_response))
        .route("/sample-questions/{topic}/{level}", get(sample_questions))
        .route("/topics", get(topics))
        .route("/sessions/{id}", get(get_session))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
