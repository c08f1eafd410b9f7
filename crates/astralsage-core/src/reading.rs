//! The `Reading` response shape shared by every operation.

use crate::error::GatewayError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MODEL_VERSION: &str = "v1.0-astrology";

/// Free-form JSON object used for `input_summary` and `analysis`.
pub type Fields = Map<String, Value>;

/// Model replies keep optional and unknown keys as sent, so a parsed reading
/// serializes back to the same JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl ReadingMeta {
    /// Meta stamped with the local model version and the current UTC time.
    pub fn now() -> Self {
        Self {
            model_version: Some(MODEL_VERSION.to_string()),
            generated_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
            extra: Fields::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            extra: Fields::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub meta: ReadingMeta,
    pub request_id: String,
    pub input_summary: Fields,
    pub analysis: Fields,
    pub interpretation: String,
    pub sections: Vec<Section>,
    pub remedies: Vec<String>,
    pub confidence_score: f64,
    /// Always `Some` on mock readings; a model may leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Reading {
    /// Parses untrusted model output into a `Reading`. Syntax errors, shape
    /// mismatches and an out-of-range confidence are all rejected.
    pub fn from_model_json(text: &str) -> Result<Self, GatewayError> {
        let value: Value = serde_json::from_str(text).map_err(GatewayError::InvalidJson)?;
        let reading: Reading = serde_json::from_value(value).map_err(GatewayError::Schema)?;
        if !(0.0..=1.0).contains(&reading.confidence_score) {
            return Err(GatewayError::ConfidenceOutOfRange(reading.confidence_score));
        }
        Ok(reading)
    }

    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or_default()
    }
}

/// Unwraps a `json!` object literal; anything else yields an empty map.
pub(crate) fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Fresh v4 identifier; never reused across calls.
pub fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
