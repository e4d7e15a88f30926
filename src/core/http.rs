//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::analysis::{classify_sentiment, compute_technical_report};
use crate::metrics::Metrics;
use crate::models::PricePoint;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "tickerlens-analysis-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct TechnicalRequest {
    current_price: f64,
    series: Vec<PricePoint>,
}

#[derive(Debug, Deserialize)]
struct SentimentRequest {
    vix_closes: Vec<f64>,
}

/// Compute the technical indicator report for a price series supplied by
/// the caller. Fetching the series is the caller's responsibility.
async fn technical_report(
    State(state): State<AppState>,
    Json(request): Json<TechnicalRequest>,
) -> (StatusCode, Json<Value>) {
    match compute_technical_report(&request.series, request.current_price) {
        Ok(report) => {
            state.metrics.reports_computed_total.inc();
            (StatusCode::OK, Json(json!({ "success": true, "data": report })))
        }
        Err(e) => {
            state.metrics.report_failures_total.inc();
            warn!(error = %e, samples = request.series.len(), "Rejected technical report request");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                    "message": "Failed to compute technical report. Please check the price series."
                })),
            )
        }
    }
}

/// Classify market sentiment from recent VIX closes supplied by the caller.
async fn market_sentiment(
    State(_state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> (StatusCode, Json<Value>) {
    match classify_sentiment(&request.vix_closes) {
        Some(report) => (StatusCode::OK, Json(json!({ "success": true, "data": report }))),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Unable to classify market sentiment from the supplied VIX closes"
            })),
        ),
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/technical", post(technical_report))
        .route("/api/sentiment", post(market_sentiment))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
