pub mod knowledge_response;
pub mod sample_questions_route;
pub mod topics_route;
