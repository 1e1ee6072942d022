use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use dosimetry::error::AppError;
use dosimetry::sentencing::{
    sentencing_router, SentencingEngine, SentencingOutcome, SentencingReport, SentencingRequest,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct SentencingReportResponse {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) outcome: SentencingOutcome,
    pub(crate) report: SentencingReport,
}

pub(crate) fn with_sentencing_routes(engine: Arc<SentencingEngine>) -> axum::Router {
    sentencing_router(engine.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/sentencing/report",
            axum::routing::post(sentencing_report_endpoint),
        )
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn sentencing_report_endpoint(
    Extension(engine): Extension<Arc<SentencingEngine>>,
    Json(request): Json<SentencingRequest>,
) -> Result<Json<SentencingReportResponse>, AppError> {
    let outcome = engine.evaluate(&request)?;
    let report = outcome.report();

    Ok(Json(SentencingReportResponse {
        evaluated_at: Utc::now(),
        outcome,
        report,
    }))
}
