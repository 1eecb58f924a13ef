//! LLM gateway plumbing shared by the interview backend.
//!
//! - [`config`] describes a model/provider and loads it from the environment.
//! - [`services`] holds the provider clients (OpenAI-compatible chat and Ollama).
//! - [`llm_service::LlmService`] picks the right client for a config and
//!   exposes a single `generate(prompt, system)` call.
//! - [`telemetry`] offers a library-scoped `tracing` layer.

pub mod config;
pub mod error_handler;
pub mod llm_service;
pub mod services;
pub mod telemetry;

pub use config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
pub use error_handler::{AiLlmError, ConfigError, ProviderError, ProviderErrorKind};
pub use llm_service::LlmService;
