pub mod coding_question_route;
pub mod evaluate_response_route;
pub mod interview_request;
pub mod next_question_route;
pub mod start_interview_route;
