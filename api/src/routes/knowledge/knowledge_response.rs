use serde::Serialize;

/// Response payload for /sample-questions/{topic}/{level}.
#[derive(Debug, Serialize)]
pub struct SampleQuestionsResponse {
    pub topic: String,
    pub level: String,
    /// Canned questions, or the one-element "not found" list.
    pub questions: Vec<String>,
}

/// Response payload for /topics.
#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<&'static str>,
}
