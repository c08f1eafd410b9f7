//! Request data for the four reading operations.

use serde::{Deserialize, Serialize};

/// Literal used by callers when the birth time is not known.
pub const BIRTH_TIME_UNKNOWN: &str = "unknown";

fn default_birth_time() -> String {
    BIRTH_TIME_UNKNOWN.to_string()
}

fn default_timezone() -> String {
    "+00:00".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthPlace {
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl BirthPlace {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            lat: None,
            lon: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Concise,
    #[default]
    Friendly,
    Mystical,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Friendly => "friendly",
            Self::Mystical => "mystical",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Today,
    Tomorrow,
    ThisWeek,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this_week",
        }
    }
}

/// Relationship category for a compatibility reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipFocus {
    #[default]
    Romantic,
    Work,
    Friendship,
}

impl RelationshipFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Work => "work",
            Self::Friendship => "friendship",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastRange {
    #[default]
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "3-day")]
    ThreeDay,
    #[serde(rename = "7-day")]
    SevenDay,
}

impl ForecastRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThreeDay => "3-day",
            Self::SevenDay => "7-day",
        }
    }
}

/// Life area a transit forecast concentrates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastFocus {
    Career,
    Love,
    Health,
    #[default]
    General,
}

impl ForecastFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Love => "love",
            Self::Health => "health",
            Self::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChartRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub birth_date: String,
    #[serde(default = "default_birth_time")]
    pub birth_time: String,
    #[serde(default = "default_timezone")]
    pub birth_timezone: String,
    pub birth_place: BirthPlace,
    #[serde(default)]
    pub tone: Tone,
}

impl NatalChartRequest {
    pub fn birth_time_known(&self) -> bool {
        self.birth_time != BIRTH_TIME_UNKNOWN
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickHoroscopeRequest {
    pub sign: String,
    #[serde(default)]
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(default)]
    pub person_a_name: Option<String>,
    pub person_a_birth_date: String,
    #[serde(default = "default_birth_time")]
    pub person_a_birth_time: String,
    pub person_a_birth_place: BirthPlace,
    #[serde(default)]
    pub person_b_name: Option<String>,
    pub person_b_birth_date: String,
    #[serde(default = "default_birth_time")]
    pub person_b_birth_time: String,
    pub person_b_birth_place: BirthPlace,
    #[serde(default)]
    pub focus: RelationshipFocus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitForecastRequest {
    pub birth_date: String,
    #[serde(default = "default_birth_time")]
    pub birth_time: String,
    #[serde(default = "default_timezone")]
    pub birth_timezone: String,
    pub birth_place: BirthPlace,
    #[serde(default)]
    pub range: ForecastRange,
    #[serde(default)]
    pub focus: ForecastFocus,
}

/// One request per public operation. Matching on this is exhaustive, so a new
/// operation must be wired into prompts, mocks and routing before it compiles.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingRequest {
    NatalChart(NatalChartRequest),
    QuickHoroscope(QuickHoroscopeRequest),
    Compatibility(CompatibilityRequest),
    TransitForecast(TransitForecastRequest),
}

impl ReadingRequest {
    /// Task name used in prompts and logs.
    pub fn task(&self) -> &'static str {
        match self {
            Self::NatalChart(_) => "natal_chart",
            Self::QuickHoroscope(_) => "quick_horoscope",
            Self::Compatibility(_) => "compatibility",
            Self::TransitForecast(_) => "transit_forecast",
        }
    }
}

impl From<NatalChartRequest> for ReadingRequest {
    fn from(r: NatalChartRequest) -> Self {
        Self::NatalChart(r)
    }
}

impl From<QuickHoroscopeRequest> for ReadingRequest {
    fn from(r: QuickHoroscopeRequest) -> Self {
        Self::QuickHoroscope(r)
    }
}

impl From<CompatibilityRequest> for ReadingRequest {
    fn from(r: CompatibilityRequest) -> Self {
        Self::Compatibility(r)
    }
}

impl From<TransitForecastRequest> for ReadingRequest {
    fn from(r: TransitForecastRequest) -> Self {
        Self::TransitForecast(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn natal_defaults_apply() {
        let req: NatalChartRequest = serde_json::from_value(json!({
            "birth_date": "2005-03-14",
            "birth_place": { "city": "Pune", "country": "India" }
        }))
        .unwrap();
        assert_eq!(req.birth_time, "unknown");
        assert_eq!(req.birth_timezone, "+00:00");
        assert_eq!(req.tone, Tone::Friendly);
        assert!(req.name.is_none());
        assert!(!req.birth_time_known());
    }

    #[test]
    fn forecast_range_uses_hyphenated_names() {
        let req: TransitForecastRequest = serde_json::from_value(json!({
            "birth_date": "2005-03-14",
            "birth_place": { "city": "Pune", "country": "India", "lat": 18.52, "lon": 73.85 },
            "range": "7-day",
            "focus": "health"
        }))
        .unwrap();
        assert_eq!(req.range, ForecastRange::SevenDay);
        assert_eq!(req.focus, ForecastFocus::Health);
        assert_eq!(req.birth_place.lat, Some(18.52));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let res = serde_json::from_value::<QuickHoroscopeRequest>(json!({
            "sign": "Leo",
            "period": "next_year"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn task_names() {
        let req: ReadingRequest = QuickHoroscopeRequest {
            sign: "Leo".into(),
            period: Period::ThisWeek,
        }
        .into();
        assert_eq!(req.task(), "quick_horoscope");
        assert_eq!(Period::ThisWeek.as_str(), "this_week");
    }
}
