use axum::{Json, extract::Path};
use interview_core::knowledge_base;

use crate::routes::knowledge::knowledge_response::SampleQuestionsResponse;

/// Handler: GET /sample-questions/{topic}/{level}
///
/// Pure lookup; unknown pairs still answer 200 with the sentinel list.
pub async fn sample_questions(
    Path((topic, level)): Path<(String, String)>,
) -> Json<SampleQuestionsResponse> {
    let questions = knowledge_base::lookup(&topic, &level);
    Json(SampleQuestionsResponse {
        topic,
        level,
        questions,
    })
}
