//! Provider-agnostic LLM service.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Builds the provider client up front so a bad config fails at startup,
//!   not on the first request.
//!
//! # Example
//! ```no_run
//! use ai_llm_service::{LlmService, config::env_config::config_from_env};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc = LlmService::new(config_from_env()?)?;
//! let txt = svc.generate("Ask me about the JVM.", Some("You are an interviewer.")).await?;
//! println!("{txt}");
//! # Ok(()) }
//! ```

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::AiLlmError,
    services::{ollama_service::OllamaService, open_ai_service::OpenAiService},
};

enum Client {
    OpenAi(OpenAiService),
    Ollama(OllamaService),
}

/// Single-profile LLM service routing `generate` to the configured provider.
pub struct LlmService {
    cfg: LlmModelConfig,
    client: Client,
}

impl LlmService {
    /// Creates the service and its underlying HTTP client.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if the client cannot be built for `cfg`
    /// (missing API key, invalid endpoint, TLS init failure).
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let client = if cfg.provider.is_openai_compatible() {
            Client::OpenAi(OpenAiService::new(cfg.clone())?)
        } else {
            Client::Ollama(OllamaService::new(cfg.clone())?)
        };
        Ok(Self { cfg, client })
    }

    /// Generates text for `prompt`, with `system` as the system instruction.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if generation fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        match &self.client {
            Client::OpenAi(cli) => cli.generate(prompt, system).await,
            Client::Ollama(cli) => cli.generate(prompt, system).await,
        }
    }

    /// The config this service was built from.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }
}
