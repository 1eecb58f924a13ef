use serde::Deserialize;

/// Request payload for /start-interview.
#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    pub candidate_name: String,
    /// Free-form; canned questions exist for `junior`, `mid` and `senior`.
    pub experience_level: String,
    /// The first entry picks the canned question topic.
    pub focus_areas: Vec<String>,
}

/// Request payload for /next-question and /evaluate-response.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// The question that was asked.
    pub question: String,
    pub candidate_answer: String,
    /// Optional: session (from the `X-Session-Id` header) to record this exchange on.
    #[serde(default)]
    pub session_id: Option<String>,
}
