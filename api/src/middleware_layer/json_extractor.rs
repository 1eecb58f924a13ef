//! Rewrites axum's plain-text JSON rejections (400/422) into the error envelope.

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::debug;

use crate::core::http::response_envelope::{ApiErrorDetail, ApiResponse};

/// Request fields we can point at when serde names one in its message.
const KNOWN_FIELDS: [&str; 6] = [
    "candidate_name",
    "experience_level",
    "focus_areas",
    "candidate_answer",
    "session_id",
    "question",
];

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn guess_path_from_serde_msg(msg: &str) -> Option<String> {
    // `question` is last in KNOWN_FIELDS: it is the word most likely to show up by accident.
    KNOWN_FIELDS
        .iter()
        .find(|key| msg.contains(**key))
        .map(|key| key.to_string())
}

fn hint_for(msg: &str) -> Option<String> {
    if msg.contains("expected a sequence") {
        Some("Expected an array for this field (e.g. [\"core_java\", \"database\"]).".into())
    } else if msg.contains("expected a map") || msg.contains("expected struct") {
        Some("Expected a JSON object here (e.g. { \"field\": \"value\" }).".into())
    } else if msg.contains("missing field") {
        Some("Add the missing field to the request body.".into())
    } else {
        None
    }
}

fn ensure_request_id(parts: &mut axum::http::response::Parts) -> String {
    if let Some(v) = parts
        .headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.trim().is_empty())
    {
        return v.to_string();
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    if let Ok(value) = HeaderValue::from_str(&id) {
        parts.headers.insert("X-Request-Id", value);
    }
    id
}

pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();

    // Only extractor rejections are rewritten; everything else passes through.
    if !(status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY) {
        return res;
    }

    let (mut parts, bytes) = take_body(res).await;
    let original = String::from_utf8_lossy(&bytes);
    let request_id = ensure_request_id(&mut parts);
    debug!(%request_id, %status, message = %original.trim(), "request body rejected");

    let detail = ApiErrorDetail {
        path: guess_path_from_serde_msg(&original),
        hint: hint_for(&original),
    };

    let code = if status == StatusCode::BAD_REQUEST {
        "BAD_REQUEST"
    } else {
        "UNPROCESSABLE_ENTITY"
    };
    let envelope = ApiResponse::failure(code, original.trim()).with_detail(detail);

    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(),
    };

    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_field_from_serde_message() {
        let msg = "Failed to deserialize the JSON body into the target type: missing field `candidate_answer` at line 1 column 20";
        assert_eq!(guess_path_from_serde_msg(msg).as_deref(), Some("candidate_answer"));
        assert_eq!(hint_for(msg).as_deref(), Some("Add the missing field to the request body."));

        let msg = "focus_areas: invalid type: string \"x\", expected a sequence";
        assert_eq!(guess_path_from_serde_msg(msg).as_deref(), Some("focus_areas"));
        assert!(hint_for(msg).unwrap().contains("array"));

        assert_eq!(guess_path_from_serde_msg("EOF while parsing"), None);
    }
}
