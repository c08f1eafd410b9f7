use thiserror::Error;

/// Failures inside the model gateway. Never surfaced to API callers; the
/// orchestrator turns every one of these into a mock reading.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model response decode failed: {0}")]
    Decode(String),

    #[error("model returned no text")]
    EmptyReply,

    #[error("model output is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("model output does not match the reading shape: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("confidence_score {0} outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config load failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
