//! Request orchestrator: model first, full mock on any miss.

use crate::gateway::Gateway;
use crate::mock;
use crate::prompts::task_prompt;
use crate::reading::{new_request_id, Reading};
use crate::request::{
    CompatibilityRequest, NatalChartRequest, QuickHoroscopeRequest, ReadingRequest,
    TransitForecastRequest,
};
use crate::zodiac::looks_like_iso_date;
use tracing::{debug, info, warn};

/// Which path produced a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingSource {
    Model,
    Mock,
}

impl ReadingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    gateway: Gateway,
}

impl Orchestrator {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub async fn handle(&self, request: ReadingRequest) -> Reading {
        self.handle_with_source(request).await.0
    }

    /// Single model attempt; a miss is answered entirely by the mock generator.
    pub async fn handle_with_source(&self, request: ReadingRequest) -> (Reading, ReadingSource) {
        warn_on_malformed_dates(&request);

        let trace_id = new_request_id();
        let prompt = task_prompt(&request, &trace_id);

        if let Some(reading) = self.gateway.invoke(&prompt).await {
            info!(task = request.task(), trace_id = %trace_id, "Reading served by model");
            return (reading, ReadingSource::Model);
        }

        debug!(task = request.task(), trace_id = %trace_id, "Falling back to mock reading");
        (mock::generate(&request), ReadingSource::Mock)
    }

    pub async fn natal_chart(&self, request: NatalChartRequest) -> Reading {
        self.handle(request.into()).await
    }

    pub async fn quick_horoscope(&self, request: QuickHoroscopeRequest) -> Reading {
        self.handle(request.into()).await
    }

    pub async fn compatibility(&self, request: CompatibilityRequest) -> Reading {
        self.handle(request.into()).await
    }

    pub async fn transit_forecast(&self, request: TransitForecastRequest) -> Reading {
        self.handle(request.into()).await
    }
}

fn warn_on_malformed_dates(request: &ReadingRequest) {
    let dates: Vec<&str> = match request {
        ReadingRequest::NatalChart(r) => vec![r.birth_date.as_str()],
        ReadingRequest::QuickHoroscope(_) => Vec::new(),
        ReadingRequest::Compatibility(r) => vec![
            r.person_a_birth_date.as_str(),
            r.person_b_birth_date.as_str(),
        ],
        ReadingRequest::TransitForecast(r) => vec![r.birth_date.as_str()],
    };
    for date in dates.into_iter().filter(|d| !looks_like_iso_date(d)) {
        warn!(
            task = request.task(),
            birth_date = date,
            "birth_date is not YYYY-MM-DD; sign resolution is approximate"
        );
    }
}
