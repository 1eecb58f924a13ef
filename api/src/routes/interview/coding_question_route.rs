use std::sync::Arc;

use axum::{Json, extract::State};
use interview_core::{Question, interview};
use tracing::debug;

use crate::core::app_state::AppState;

/// Handler: POST /coding-question (no body)
pub async fn coding_question(State(state): State<Arc<AppState>>) -> Json<Question> {
    debug!("coding-question request");
    Json(interview::coding_question(state.gateway.as_ref()).await)
}
