//! AstralSage — Core library.
//! Zodiac tables, mock readings, the model gateway and the request orchestrator.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod mock;
pub mod orchestrator;
pub mod prompts;
pub mod reading;
pub mod request;
pub mod tables;
pub mod zodiac;

pub use client::{GeminiClient, OpenRouterClient, TextGenerator};
pub use config::{AstralConfig, Provider};
pub use error::{ConfigError, GatewayError};
pub use gateway::{strip_code_fence, Gateway, ModelClient};
pub use orchestrator::{Orchestrator, ReadingSource};
pub use reading::{Reading, ReadingMeta, Section, MODEL_VERSION};
pub use request::{
    BirthPlace, CompatibilityRequest, ForecastFocus, ForecastRange, NatalChartRequest, Period,
    QuickHoroscopeRequest, ReadingRequest, RelationshipFocus, Tone, TransitForecastRequest,
    BIRTH_TIME_UNKNOWN,
};
pub use zodiac::{sun_sign, ZodiacSign};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
