//! Interview domain for the backend.
//!
//! Public flow: [`interview::start_interview`], [`interview::next_question`],
//! [`interview::coding_question`] and [`interview::evaluate_response`]. Each
//! builds one instruction, sends it through a [`Gateway`] under a fixed
//! [`Persona`], and substitutes a canned fallback if the call fails.

pub mod error;
pub mod gateway;
pub mod interview;
pub mod knowledge_base;
pub mod models;
pub mod persona;
pub mod picker;
pub mod prompt;
pub mod score;
pub mod session_store;

pub use error::GatewayError;
pub use gateway::{Gateway, UnavailableGateway};
pub use models::{Feedback, Question, QuestionType, ResponseRecord, Session};
pub use persona::Persona;
pub use picker::QuestionPicker;
pub use session_store::SessionStore;
