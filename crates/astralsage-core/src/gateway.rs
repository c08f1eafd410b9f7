//! Model gateway: one attempt per request, any failure becomes "no result".

use crate::client::{self, TextGenerator};
use crate::config::AstralConfig;
use crate::error::GatewayError;
use crate::prompts::full_prompt;
use crate::reading::Reading;
use std::sync::Arc;
use tracing::{info, warn};

/// Whether a model client exists for this process. Decided once at startup.
#[derive(Clone)]
pub enum ModelClient {
    Configured(Arc<dyn TextGenerator>),
    Absent,
}

impl ModelClient {
    /// Missing credentials and client construction errors both yield `Absent`.
    pub fn from_config(cfg: &AstralConfig) -> Self {
        match client::from_config(cfg) {
            Ok(Some(c)) => {
                info!("Model client configured: {}", c.describe());
                Self::Configured(c)
            }
            Ok(None) => {
                info!("No model API key found - serving mock readings");
                Self::Absent
            }
            Err(e) => {
                warn!("Model client setup failed: {} - serving mock readings", e);
                Self::Absent
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Configured(c) => c.describe(),
            Self::Absent => "mock".to_string(),
        }
    }
}

impl std::fmt::Debug for ModelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelClient({})", self.describe())
    }
}

#[derive(Debug, Clone)]
pub struct Gateway {
    client: ModelClient,
}

impl Gateway {
    pub fn new(client: ModelClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ModelClient {
        &self.client
    }

    /// Sends the system block plus `task_prompt` to the model. Returns `None`
    /// when unconfigured or on any failure; failures are logged, never raised.
    pub async fn invoke(&self, task_prompt: &str) -> Option<Reading> {
        let ModelClient::Configured(generator) = &self.client else {
            return None;
        };
        match try_invoke(generator.as_ref(), task_prompt).await {
            Ok(reading) => Some(reading),
            Err(e) => {
                warn!("Model gateway error ({}): {}", generator.describe(), e);
                None
            }
        }
    }
}

async fn try_invoke(
    generator: &dyn TextGenerator,
    task_prompt: &str,
) -> Result<Reading, GatewayError> {
    let reply = generator.generate(&full_prompt(task_prompt)).await?;
    Reading::from_model_json(strip_code_fence(&reply))
}

/// Removes a surrounding markdown fence (```` ``` ```` or ```` ```json ````).
pub fn strip_code_fence(text: &str) -> &str {
    let mut t = text.trim();
    if let Some(rest) = t.strip_prefix("```json") {
        t = rest;
    }
    if let Some(rest) = t.strip_prefix("```") {
        t = rest;
    }
    if let Some(rest) = t.strip_suffix("```") {
        t = rest;
    }
    t.trim()
}
