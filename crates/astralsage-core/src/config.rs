//! Service configuration.
//!
//! Precedence: env `ASTRAL_CONFIG` file path > `config/astral.toml` > defaults, then
//! `ASTRAL__*` environment overrides (e.g. `ASTRAL__PORT=9000`). Call
//! `dotenvy::dotenv()` before `load()` so `.env` values are visible.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Provider-independent key variable, checked after the provider's own.
pub const FALLBACK_KEY_ENV: &str = "ASTRAL_LLM_API_KEY";

/// Generative-language backend used by the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    OpenRouter,
}

impl Provider {
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-flash",
            Self::OpenRouter => "openai/gpt-3.5-turbo",
        }
    }

    /// Provider-specific env var holding the API key.
    pub fn key_env(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
        }
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "*".to_string(),
    ]
}

/// Gateway configuration.
///
/// | Key | Default | Description |
/// |-----|---------|-------------|
/// | host | 0.0.0.0 | Bind address. |
/// | port | 8000 | HTTP port. |
/// | provider | gemini | `gemini` \| `openrouter`. |
/// | model | provider default | Model name passed to the provider. |
/// | api_key | unset | Falls back to GEMINI_API_KEY / OPENROUTER_API_KEY, then ASTRAL_LLM_API_KEY. |
/// | api_base_url | provider default | Alternate API base URL. |
/// | request_timeout_secs | 60 | HTTP timeout of the model client. |
/// | cors_origins | localhost:5173, localhost:3000, * | `*` allows any origin. |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstralConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overrides the provider's API base URL (proxies, local stubs).
    #[serde(default)]
    pub api_base_url: Option<String>,
    pub request_timeout_secs: u64,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for AstralConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            provider: Provider::default(),
            model: None,
            api_key: None,
            api_base_url: None,
            request_timeout_secs: 60,
            cors_origins: default_cors_origins(),
        }
    }
}

impl AstralConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("ASTRAL_CONFIG").unwrap_or_else(|_| "config/astral".to_string());
        Self::load_from(&config_path)
    }

    /// Loads defaults, then the file at `config_path` if present, then env overrides.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000_i64)?
            .set_default("provider", "gemini")?
            .set_default("request_timeout_secs", 60_i64)?;

        let builder = builder.add_source(config::File::with_name(config_path).required(false));

        let built = builder
            .add_source(
                config::Environment::with_prefix("ASTRAL")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = built.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// API key with env fallbacks. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Order: explicit `api_key`, the provider's key variable, then
    /// `ASTRAL_LLM_API_KEY`, each read through `env`.
    pub fn resolve_api_key_with<F>(&self, env: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        non_blank(self.api_key.clone())
            .or_else(|| non_blank(env(self.provider.key_env())))
            .or_else(|| non_blank(env(FALLBACK_KEY_ENV)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o.trim() == "*")
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
