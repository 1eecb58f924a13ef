//! POST /start-interview — opens an interview with a canned question.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue},
    response::IntoResponse,
};
use chrono::Local;
use interview_core::interview::{self, Candidate};
use tracing::{debug, instrument, warn};

use crate::{core::app_state::AppState, routes::interview::interview_request::StartInterviewRequest};

/// Response header carrying the id of the stored session.
pub const SESSION_ID_HEADER: &str = "X-Session-Id";

/// Handler: POST /start-interview
///
/// Always answers 200. When the model call succeeds a session is stored and
/// its id is returned in `X-Session-Id`; on fallback no session is created.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/start-interview \
///   -H 'content-type: application/json' \
///   -d '{"candidate_name":"ann","experience_level":"junior","focus_areas":["spring_boot"]}'
/// ```
#[instrument(name = "start_interview_route", skip(state, body))]
pub async fn start_interview(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartInterviewRequest>,
) -> impl IntoResponse {
    debug!(
        candidate = %body.candidate_name,
        level = %body.experience_level,
        focus_areas = ?body.focus_areas,
        "start-interview request"
    );

    let candidate = Candidate {
        name: &body.candidate_name,
        experience_level: &body.experience_level,
        focus_areas: &body.focus_areas,
    };

    let outcome = interview::start_interview(
        state.gateway.as_ref(),
        &state.picker,
        candidate,
        Local::now().naive_local(),
    )
    .await;

    let mut headers = HeaderMap::new();
    if let Some(session) = outcome.session {
        match HeaderValue::from_str(&session.id) {
            Ok(value) => {
                headers.insert(SESSION_ID_HEADER, value);
            }
            Err(_) => warn!(session_id = %session.id, "session id is not a valid header value"),
        }
        state.sessions.create(session.id.clone(), session).await;
        let sessions = state.sessions.len().await;
        debug!(sessions, "interview session opened");
    }

    (headers, Json(outcome.question))
}
