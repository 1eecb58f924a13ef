//! GET /sessions/{id} — read back a stored interview session.

use std::sync::Arc;

use axum::extract::{Path, State};
use interview_core::Session;
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
};

/// Handler: GET /sessions/{id}
///
/// `{ "success": true, "data": <session> }`, or 404 `NOT_FOUND` in the
/// error envelope.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Session>> {
    let session = state
        .sessions
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("session `{id}`")))?;

    debug!(
        session_id = %id,
        questions = session.questions_asked.len(),
        responses = session.responses.len(),
        "session read"
    );

    Ok(ApiResponse::success(session))
}
