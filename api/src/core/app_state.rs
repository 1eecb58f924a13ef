use std::sync::Arc;

use ai_llm_service::{LlmModelConfig, LlmService, config::env_config::config_from_env};
use interview_core::{Gateway, QuestionPicker, SessionStore, UnavailableGateway};
use thiserror::Error;
use tracing::{info, warn};

use crate::error_handler::AppError;

const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

/// Startup configuration errors for the HTTP layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value in {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        reason: &'static str,
    },
}

/// Server knobs read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address, `API_ADDRESS` (default `0.0.0.0:8000`).
    pub address: String,
    /// Fixed RNG seed for question selection, `INTERVIEW_SEED`.
    pub seed: Option<u64>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("API_ADDRESS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let seed = match lookup("INTERVIEW_SEED").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    var: "INTERVIEW_SEED",
                    reason: "expected u64",
                }
            })?),
            None => None,
        };

        Ok(Self { address, seed })
    }
}

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Boundary to the hosted LLM.
    pub gateway: Arc<dyn Gateway>,
    /// In-memory interview sessions; lives as long as the process.
    pub sessions: SessionStore,
    /// Random choice of the opening canned question.
    pub picker: QuestionPicker,
}

impl AppState {
    pub fn new(gateway: Arc<dyn Gateway>, picker: QuestionPicker) -> Self {
        Self {
            gateway,
            sessions: SessionStore::new(),
            picker,
        }
    }

    /// Builds state from the environment. See [`AppState::from_llm_config`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppError> {
        Self::from_llm_config(config_from_env()?, config.seed)
    }

    /// Builds state around an already loaded LLM config.
    ///
    /// A missing provider API key is not fatal: the server starts with a
    /// gateway that fails every call, so all endpoints answer with their
    /// fallbacks. Any other LLM config problem aborts startup.
    pub fn from_llm_config(llm_cfg: LlmModelConfig, seed: Option<u64>) -> Result<Self, AppError> {
        let gateway: Arc<dyn Gateway> =
            if llm_cfg.provider.is_openai_compatible() && llm_cfg.api_key.is_none() {
                let var = llm_cfg.provider.api_key_var().unwrap_or("LLM_API_KEY");
                warn!(
                    provider = %llm_cfg.provider,
                    "{var} environment variable not set; \
                     LLM calls will fail and endpoints will serve fallbacks"
                );
                Arc::new(UnavailableGateway::new(format!("{var} is not set")))
            } else {
                info!(
                    provider = %llm_cfg.provider,
                    model = %llm_cfg.model,
                    "LLM credentials found"
                );
                Arc::new(LlmService::new(llm_cfg)?)
            };

        Ok(Self::new(gateway, QuestionPicker::new(seed)))
    }
}

#[cfg(test)]
mod tests {
    use ai_llm_service::LlmProvider;
    use interview_core::{GatewayError, persona::INTERVIEWER};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use super::*;

    fn llm_config(provider: LlmProvider, endpoint: &str, api_key: Option<&str>) -> LlmModelConfig {
        LlmModelConfig {
            provider,
            model: provider.default_model().to_string(),
            endpoint: endpoint.to_string(),
            api_key: api_key.map(str::to_string),
            max_tokens: None,
            temperature: Some(0.7),
            top_p: None,
            timeout_secs: Some(5),
        }
    }

    #[tokio::test]
    async fn keyless_groq_starts_with_failing_gateway() {
        let cfg = llm_config(LlmProvider::Groq, LlmProvider::Groq.default_endpoint(), None);
        let state = AppState::from_llm_config(cfg, Some(1)).unwrap();

        let err = state
            .gateway
            .generate(&INTERVIEWER, "Ask about the JVM.")
            .await
            .unwrap_err();
        match err {
            GatewayError::Unavailable(reason) => assert!(reason.contains("GROQ_API_KEY")),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn keyless_ollama_builds_real_client() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Tell me about the JVM.",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cfg = llm_config(LlmProvider::Ollama, &server.uri(), None);
        let state = AppState::from_llm_config(cfg, None).unwrap();

        let text = state
            .gateway
            .generate(&INTERVIEWER, "Ask about the JVM.")
            .await
            .unwrap();
        assert_eq!(text, "Tell me about the JVM.");
    }

    #[test]
    fn other_llm_config_errors_abort_startup() {
        let cfg = llm_config(LlmProvider::Ollama, "localhost:11434", None);
        assert!(matches!(
            AppState::from_llm_config(cfg, None),
            Err(AppError::Llm(_))
        ));
    }

    #[test]
    fn api_config_defaults_and_overrides() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.address, "0.0.0.0:8000");
        assert_eq!(cfg.seed, None);

        let cfg = ApiConfig::from_lookup(|name| match name {
            "API_ADDRESS" => Some("127.0.0.1:9000".into()),
            "INTERVIEW_SEED" => Some(" 42 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.address, "127.0.0.1:9000");
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn api_config_rejects_bad_seed() {
        let err =
            ApiConfig::from_lookup(|name| (name == "INTERVIEW_SEED").then(|| "x".to_string()))
                .unwrap_err();
        assert!(err.to_string().contains("INTERVIEW_SEED"));
    }
}
