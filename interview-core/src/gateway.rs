//! The single boundary to the hosted model: `generate(persona, instruction)`.

use ai_llm_service::LlmService;
use async_trait::async_trait;
use tracing::debug;

use crate::{error::GatewayError, persona::Persona};

/// Text generation under a fixed persona.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn generate(&self, persona: &Persona, instruction: &str) -> Result<String, GatewayError>;
}

#[async_trait]
impl Gateway for LlmService {
    async fn generate(&self, persona: &Persona, instruction: &str) -> Result<String, GatewayError> {
        debug!(
            persona = persona.role,
            model = %self.config().model,
            instruction_len = instruction.len(),
            "gateway call"
        );
        let system = persona.system_prompt();
        Ok(LlmService::generate(self, instruction, Some(system.as_str())).await?)
    }
}

/// Stand-in used when the real client could not be built; every call fails.
#[derive(Debug, Clone)]
pub struct UnavailableGateway {
    reason: String,
}

impl UnavailableGateway {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Gateway for UnavailableGateway {
    async fn generate(
        &self,
        _persona: &Persona,
        _instruction: &str,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable(self.reason.clone()))
    }
}
