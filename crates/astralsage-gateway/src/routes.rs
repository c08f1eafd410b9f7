//! HTTP surface: root descriptor, health probe and the four reading endpoints.

use astralsage_core::{
    AstralConfig, CompatibilityRequest, NatalChartRequest, Orchestrator, QuickHoroscopeRequest,
    Reading, TransitForecastRequest,
};
use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const ENDPOINTS: [&str; 4] = [
    "/api/natal-chart",
    "/api/quick-horoscope",
    "/api/compatibility",
    "/api/transit-forecast",
];

pub struct AppState {
    orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }
}

pub fn build_app(state: Arc<AppState>, cfg: &AstralConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(ENDPOINTS[0], post(natal_chart))
        .route(ENDPOINTS[1], post(quick_horoscope))
        .route(ENDPOINTS[2], post(compatibility))
        .route(ENDPOINTS[3], post(transit_forecast))
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(cors_layer(cfg))
}

fn cors_layer(cfg: &AstralConfig) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cfg.cors_allows_any() {
        return base.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = cfg
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o.trim()) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to AstralSage API! 🌟",
        "version": astralsage_core::version(),
        "endpoints": ENDPOINTS,
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "model": state.orchestrator.gateway().client().describe(),
    }))
}

async fn natal_chart(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NatalChartRequest>,
) -> Json<Reading> {
    Json(state.orchestrator.natal_chart(body).await)
}

async fn quick_horoscope(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuickHoroscopeRequest>,
) -> Json<Reading> {
    Json(state.orchestrator.quick_horoscope(body).await)
}

async fn compatibility(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CompatibilityRequest>,
) -> Json<Reading> {
    Json(state.orchestrator.compatibility(body).await)
}

async fn transit_forecast(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TransitForecastRequest>,
) -> Json<Reading> {
    Json(state.orchestrator.transit_forecast(body).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astralsage_core::{Gateway, GatewayError, ModelClient, TextGenerator};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, StatusCode};
    use tower::ServiceExt;

    fn mock_app() -> Router {
        let state = Arc::new(AppState::new(Orchestrator::new(Gateway::new(
            ModelClient::Absent,
        ))));
        build_app(state, &AstralConfig::default())
    }

    async fn post_json(
        app: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let req = axum::http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let (status, json) = get_json(mock_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["endpoints"].as_array().unwrap().len(), 4);
        assert_eq!(json["endpoints"][1], "/api/quick-horoscope");
    }

    #[tokio::test]
    async fn health_reports_mock_mode() {
        let (status, json) = get_json(mock_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["model"], "mock");
    }

    #[tokio::test]
    async fn natal_chart_defaults_to_unknown_time() {
        let (status, json) = post_json(
            mock_app(),
            "/api/natal-chart",
            serde_json::json!({
                "name": "Kai",
                "birth_date": "2005-08-10",
                "birth_place": { "city": "Nairobi", "country": "Kenya" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["confidence_score"], 0.65);
        assert_eq!(json["analysis"]["sun"], "Leo 15°");
        assert_eq!(json["analysis"]["moon"], "Unknown (birth time required)");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn quick_horoscope_splits_bullets() {
        let (status, json) = post_json(
            mock_app(),
            "/api/quick-horoscope",
            serde_json::json!({ "sign": "Aries" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sections"][0]["title"], "Career");
        assert_eq!(json["sections"][0]["content"], "Take initiative in group projects");
        assert_eq!(json["input_summary"]["period"], "today");
    }

    #[tokio::test]
    async fn compatibility_fills_blank_names() {
        let place = serde_json::json!({ "city": "Quito", "country": "Ecuador" });
        let (status, json) = post_json(
            mock_app(),
            "/api/compatibility",
            serde_json::json!({
                "person_a_name": "",
                "person_a_birth_date": "2004-02-02",
                "person_a_birth_place": place,
                "person_b_birth_date": "2004-06-06",
                "person_b_birth_place": place,
                "focus": "friendship"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["input_summary"]["person_a"], "Person A");
        assert_eq!(json["input_summary"]["person_b"], "Person B");
        assert_eq!(json["input_summary"]["focus"], "friendship");
    }

    #[tokio::test]
    async fn transit_forecast_echoes_focus_and_range() {
        let (status, json) = post_json(
            mock_app(),
            "/api/transit-forecast",
            serde_json::json!({
                "birth_date": "2004-03-25",
                "birth_place": { "city": "Rome", "country": "Italy" },
                "range": "3-day",
                "focus": "career"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["input_summary"]["range"], "3-day");
        assert_eq!(json["input_summary"]["focus"], "career");
        assert_eq!(json["input_summary"]["sign"], "Aries");
    }

    #[tokio::test]
    async fn invalid_option_is_rejected() {
        let (status, _) = post_json(
            mock_app(),
            "/api/quick-horoscope",
            serde_json::json!({ "sign": "Leo", "period": "next_decade" }),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn missing_birth_place_is_rejected() {
        let (status, _) = post_json(
            mock_app(),
            "/api/natal-chart",
            serde_json::json!({ "birth_date": "2005-08-10" }),
        )
        .await;
        assert!(status.is_client_error());
    }

    struct FixedModel;

    #[async_trait]
    impl TextGenerator for FixedModel {
        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            Ok(r#"```json
{"meta":{"model_version":"gemini-1.5-flash","generated_at":"2026-01-01T00:00:00Z"},"request_id":"from-model","input_summary":{"sign":"Virgo"},"analysis":{"sign":"Virgo"},"interpretation":"Model says hi","sections":[{"title":"Focus","content":"Tidy up"}],"remedies":["Stretch"],"confidence_score":0.7,"warnings":[]}
```"#
                .to_string())
        }

        fn describe(&self) -> String {
            "fixed".into()
        }
    }

    #[tokio::test]
    async fn configured_model_reading_is_returned() {
        let state = Arc::new(AppState::new(Orchestrator::new(Gateway::new(
            ModelClient::Configured(Arc::new(FixedModel)),
        ))));
        let app = build_app(state, &AstralConfig::default());
        let (status, json) = post_json(
            app,
            "/api/quick-horoscope",
            serde_json::json!({ "sign": "Virgo", "period": "tomorrow" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["request_id"], "from-model");
        assert_eq!(json["interpretation"], "Model says hi");
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let cfg = AstralConfig {
            cors_origins: vec!["http://localhost:5173".into()],
            ..Default::default()
        };
        let state = Arc::new(AppState::new(Orchestrator::new(Gateway::new(
            ModelClient::Absent,
        ))));
        let app = build_app(state, &cfg);
        let req = axum::http::Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/natal-chart")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(
            res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
