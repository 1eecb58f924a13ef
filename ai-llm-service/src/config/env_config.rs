//! LLM config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `LLM_KIND`         = provider kind (`groq` | `openai` | `ollama`), default `groq`
//! - `GROQ_API_KEY` / `OPENAI_API_KEY` = provider key, falls back to `LLM_API_KEY`
//! - `LLM_MODEL`        = model id (provider default if unset)
//! - `LLM_ENDPOINT`     = base URL (provider default if unset)
//! - `LLM_TEMPERATURE`  = sampling temperature, default `0.7`
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = request timeout, default `60`
//!
//! A missing API key is **not** an error here: the config is returned with
//! `api_key = None` and the client reports it when it is built.

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        ConfigError, Result, parse_opt, validate_http_endpoint, validate_range_f32,
    },
};

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Builds the model config from the process environment.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_KIND`
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad knobs
/// - [`ConfigError::InvalidFormat`] if `LLM_ENDPOINT` has no http(s) scheme
pub fn config_from_env() -> Result<LlmModelConfig> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Same as [`config_from_env`], reading variables through `lookup`.
pub fn config_from_lookup<F>(lookup: F) -> Result<LlmModelConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let provider = match non_empty("LLM_KIND") {
        Some(kind) => kind.parse::<LlmProvider>()?,
        None => LlmProvider::Groq,
    };

    let model = non_empty("LLM_MODEL")
        .unwrap_or_else(|| provider.default_model().to_string())
        .trim()
        .to_string();
    if model.is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    let endpoint = non_empty("LLM_ENDPOINT")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| provider.default_endpoint().to_string());
    validate_http_endpoint("LLM_ENDPOINT", &endpoint)?;

    let api_key = provider
        .api_key_var()
        .and_then(|var| non_empty(var))
        .or_else(|| non_empty("LLM_API_KEY"));

    let temperature = parse_opt::<f32>(
        "LLM_TEMPERATURE",
        lookup("LLM_TEMPERATURE"),
        "expected f32",
    )?
    .unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    let max_tokens = parse_opt::<u32>("LLM_MAX_TOKENS", lookup("LLM_MAX_TOKENS"), "expected u32")?;
    let timeout_secs = parse_opt::<u64>(
        "LLM_TIMEOUT_SECS",
        lookup("LLM_TIMEOUT_SECS"),
        "expected u64",
    )?
    .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        provider,
        model,
        endpoint,
        api_key,
        max_tokens,
        temperature: Some(temperature),
        top_p: None,
        timeout_secs: Some(timeout_secs),
    })
}
