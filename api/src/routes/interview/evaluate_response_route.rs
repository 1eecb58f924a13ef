use std::sync::Arc;

use axum::{Json, extract::State};
use interview_core::{Feedback, ResponseRecord, interview};
use tracing::debug;

use crate::{core::app_state::AppState, routes::interview::interview_request::AnswerRequest};

/// Handler: POST /evaluate-response
///
/// Scores the answer. With a known `session_id` a response record is
/// appended to that session; unknown ids are ignored.
pub async fn evaluate_response(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnswerRequest>,
) -> Json<Feedback> {
    debug!(session_id = ?body.session_id, "evaluate-response request");

    let feedback =
        interview::evaluate_response(state.gateway.as_ref(), &body.question, &body.candidate_answer)
            .await;

    if let Some(id) = body.session_id.as_deref() {
        let record = ResponseRecord::new(&body.question, &body.candidate_answer, &feedback);
        if !state.sessions.append_response(id, record).await {
            debug!(session_id = %id, "unknown session, response not recorded");
        }
    }

    Json(feedback)
}
