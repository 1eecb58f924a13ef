use std::sync::Arc;

use axum::{Json, extract::State};
use interview_core::{Question, interview};
use tracing::debug;

use crate::{core::app_state::AppState, routes::interview::interview_request::AnswerRequest};

/// Handler: POST /next-question
///
/// Follow-up based on the previous question and answer. With a known
/// `session_id` the question is appended to that session.
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnswerRequest>,
) -> Json<Question> {
    debug!(session_id = ?body.session_id, "next-question request");

    let question =
        interview::next_question(state.gateway.as_ref(), &body.question, &body.candidate_answer)
            .await;

    if let Some(id) = body.session_id.as_deref() {
        if !state.sessions.append_question(id, question.clone()).await {
            debug!(session_id = %id, "unknown session, question not recorded");
        }
    }

    Json(question)
}
