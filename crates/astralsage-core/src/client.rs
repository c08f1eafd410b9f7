//! reqwest-backed generative-language clients.
//!
//! API key comes from `AstralConfig::resolve_api_key` (`GEMINI_API_KEY` /
//! `OPENROUTER_API_KEY` in `.env`). The HTTP timeout is the only deadline on a
//! model call; the gateway itself never retries or times out.

use crate::config::{AstralConfig, Provider};
use crate::error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// "Generate text from prompt" capability. Implemented by the HTTP clients
/// below and by fakes in tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Short label for logs, e.g. `gemini:gemini-1.5-flash`.
    fn describe(&self) -> String;
}

/// Builds the client for `cfg.provider`, or `None` when no API key is set.
pub fn from_config(cfg: &AstralConfig) -> Result<Option<Arc<dyn TextGenerator>>, GatewayError> {
    build(cfg, cfg.resolve_api_key())
}

fn build(
    cfg: &AstralConfig,
    api_key: Option<String>,
) -> Result<Option<Arc<dyn TextGenerator>>, GatewayError> {
    let Some(api_key) = api_key else {
        return Ok(None);
    };
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .build()?;
    let model = cfg.model_name().to_string();
    let base_url = cfg
        .api_base_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());
    let client: Arc<dyn TextGenerator> = match cfg.provider {
        Provider::Gemini => {
            let mut c = GeminiClient::new(http, api_key, model);
            if let Some(url) = base_url {
                c = c.with_base_url(url);
            }
            Arc::new(c)
        }
        Provider::OpenRouter => {
            let mut c = OpenRouterClient::new(http, api_key, model);
            if let Some(url) = base_url {
                c = c.with_base_url(url);
            }
            Arc::new(c)
        }
    };
    Ok(Some(client))
}

async fn read_success_body(res: reqwest::Response) -> Result<String, GatewayError> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// Gemini generateContent
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiReplyContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyPart {
    text: Option<String>,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let res = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        let text = read_success_body(res).await?;

        let parsed: GeminiResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;
        gemini_text(parsed).ok_or(GatewayError::EmptyReply)
    }

    fn describe(&self) -> String {
        format!("gemini:{}", self.model)
    }
}

fn gemini_text(parsed: GeminiResponse) -> Option<String> {
    let content = parsed.candidates?.into_iter().next()?.content?;
    let joined: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    (!joined.trim().is_empty()).then_some(joined)
}

// ---------------------------------------------------------------------------
// OpenRouter chat completion (OpenAI-compatible)
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
            base_url: OPENROUTER_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl TextGenerator for OpenRouterClient {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("X-Title", "AstralSage")
            .json(&body)
            .send()
            .await?;
        let text = read_success_body(res).await?;

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;
        parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(GatewayError::EmptyReply)
    }

    fn describe(&self) -> String {
        format!("openrouter:{}", self.model)
    }
}
