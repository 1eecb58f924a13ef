use axum::Json;
use interview_core::knowledge_base;

use crate::routes::knowledge::knowledge_response::TopicsResponse;

/// Handler: GET /topics
pub async fn topics() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: knowledge_base::topics().to_vec(),
    })
}
