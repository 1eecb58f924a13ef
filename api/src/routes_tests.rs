use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use interview_core::{
    Gateway, GatewayError, Persona, QuestionPicker, UnavailableGateway, knowledge_base,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{core::app_state::AppState, router};

/// Always answers with the same text.
struct Scripted(&'static str);

#[async_trait]
impl Gateway for Scripted {
    async fn generate(
        &self,
        _persona: &Persona,
        _instruction: &str,
    ) -> Result<String, GatewayError> {
        Ok(self.0.to_string())
    }
}

fn app_with(gateway: Arc<dyn Gateway>) -> Router {
    router(Arc::new(AppState::new(gateway, QuestionPicker::new(Some(7)))))
}

fn offline_app() -> Router {
    app_with(Arc::new(UnavailableGateway::new("no key in tests")))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

#[tokio::test]
async fn health_reports_healthy_with_timestamp() {
    let (status, _, body) = send(&offline_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    let ts = body["timestamp"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.6f").is_ok());
}

#[tokio::test]
async fn sample_questions_known_and_unknown_pairs() {
    let app = offline_app();

    let (status, _, body) = send(&app, get("/sample-questions/core_java/junior")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["topic"], "core_java");
    assert_eq!(body["level"], "junior");
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);

    let (status, _, body) = send(&app, get("/sample-questions/microservices/junior")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([knowledge_base::NOT_FOUND]));
}

#[tokio::test]
async fn topics_lists_knowledge_base_topics() {
    let (status, _, body) = send(&offline_app(), get("/topics")).await;
    assert_eq!(status, StatusCode::OK);
    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 5);
    assert!(topics.contains(&json!("microservices")));
}

#[tokio::test]
async fn start_interview_falls_back_to_canned_question_without_session() {
    let app = offline_app();
    let (status, headers, body) = send(
        &app,
        post_json(
            "/start-interview",
            json!({"candidate_name": "ada", "experience_level": "junior", "focus_areas": []}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let canned = knowledge_base::lookup("core_java", "junior");
    assert_eq!(body["question"], canned[0].as_str());
    assert_eq!(body["question_type"], "technical");
    assert_eq!(body["difficulty"], "junior");
    assert_eq!(body["topic"], "core_java");
    assert!(headers.get("x-session-id").is_none());
}

#[tokio::test]
async fn start_interview_fallback_for_unknown_pair_is_sentinel_text() {
    let (status, _, body) = send(
        &offline_app(),
        post_json(
            "/start-interview",
            json!({
                "candidate_name": "ada",
                "experience_level": "principal",
                "focus_areas": ["kotlin"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], knowledge_base::NOT_FOUND);
    assert_eq!(body["topic"], "kotlin");
}

#[tokio::test]
async fn next_and_coding_fallbacks() {
    let app = offline_app();

    let (status, _, body) = send(
        &app,
        post_json("/next-question", json!({"question": "q", "candidate_answer": "a"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "question": "Can you explain a challenging technical problem you've solved recently?",
            "question_type": "technical",
            "difficulty": "adaptive",
            "topic": "problem_solving"
        })
    );

    let coding = Request::post("/coding-question").body(Body::empty()).unwrap();
    let (status, _, body) = send(&app, coding).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question_type"], "coding");
    assert_eq!(body["difficulty"], "practical");
    assert_eq!(body["topic"], "programming");
    assert!(body["question"].as_str().unwrap().contains("second largest element"));
}

#[tokio::test]
async fn evaluate_response_fallback() {
    let (status, _, body) = send(
        &offline_app(),
        post_json("/evaluate-response", json!({"question": "q", "candidate_answer": "a"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "score": 5,
            "feedback": "Unable to evaluate response at this time. Please try again.",
            "suggestions": ["Review the topic", "Practice more examples"]
        })
    );
}

#[tokio::test]
async fn evaluate_response_extracts_score_from_model_text() {
    let app = app_with(Arc::new(Scripted("Solid answer.\nScore: 8\nMore depth on GC.")));
    let (status, _, body) = send(
        &app,
        post_json("/evaluate-response", json!({"question": "q", "candidate_answer": "a"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 8);
    assert_eq!(body["feedback"], "Solid answer.\nScore: 8\nMore depth on GC.");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn session_is_stored_and_extended_through_session_id() {
    let app = app_with(Arc::new(Scripted("  Score: 9. Tell me about the JVM.  ")));

    let (status, headers, body) = send(
        &app,
        post_json(
            "/start-interview",
            json!({
                "candidate_name": "ada",
                "experience_level": "mid",
                "focus_areas": ["database"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "Score: 9. Tell me about the JVM.");
    assert_eq!(body["topic"], "database");

    let id = headers
        .get("x-session-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(id.starts_with("ada_"));

    let answer = json!({"question": "q1", "candidate_answer": "a1", "session_id": id});
    let (status, _, _) = send(&app, post_json("/next-question", answer.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, feedback) = send(&app, post_json("/evaluate-response", answer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(feedback["score"], 9);

    let (status, _, body) = send(&app, get(&format!("/sessions/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let session = &body["data"];
    assert_eq!(session["id"], id.as_str());
    assert_eq!(session["candidate"], "ada");
    assert_eq!(session["level"], "mid");
    assert_eq!(session["focus_areas"], json!(["database"]));
    assert_eq!(session["questions_asked"].as_array().unwrap().len(), 2);
    assert_eq!(session["questions_asked"][1]["topic"], "follow_up");
    assert_eq!(
        session["responses"],
        json!([{
            "question": "q1",
            "candidate_answer": "a1",
            "score": 9,
            "feedback": "  Score: 9. Tell me about the JVM.  "
        }])
    );
}

#[tokio::test]
async fn unknown_session_id_is_ignored_on_answers() {
    let (status, _, body) = send(
        &offline_app(),
        post_json(
            "/evaluate-response",
            json!({"question": "q", "candidate_answer": "a", "session_id": "nobody"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 5);
}

#[tokio::test]
async fn unknown_session_lookup_is_not_found_envelope() {
    let (status, _, body) = send(&offline_app(), get("/sessions/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_json_is_rewritten_into_envelope() {
    let app = offline_app();

    let req = Request::builder()
        .method("POST")
        .uri("/evaluate-response")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, headers, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(headers.get("x-request-id").is_some());

    let partial = post_json("/evaluate-response", json!({"question": "q"}));
    let (status, _, body) = send(&app, partial).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    assert_eq!(body["error"]["details"][0]["path"], "candidate_answer");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let req = Request::builder()
        .uri("/health")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&offline_app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
}
