//! Typed error for the interview-core crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

/// External generation failure: any error coming out of the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Errors from the underlying LLM client.
    #[error("LLM error: {0}")]
    Llm(#[from] AiLlmError),

    /// No client could be built at startup (e.g. missing API key).
    #[error("LLM gateway unavailable: {0}")]
    Unavailable(String),
}
