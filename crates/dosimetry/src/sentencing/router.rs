use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{JudicialCircumstance, SentencingRequest};
use super::engine::SentencingEngine;

#[derive(Debug, Clone, Serialize)]
pub struct CircumstanceView {
    pub circumstance: JudicialCircumstance,
    pub key: &'static str,
    pub label: &'static str,
}

pub fn circumstance_catalog() -> Vec<CircumstanceView> {
    JudicialCircumstance::ordered()
        .into_iter()
        .map(|circumstance| CircumstanceView {
            circumstance,
            key: circumstance.key(),
            label: circumstance.label(),
        })
        .collect()
}

/// Router builder exposing the evaluation endpoint and the circumstance catalog.
pub fn sentencing_router(engine: Arc<SentencingEngine>) -> Router {
    Router::new()
        .route("/api/v1/sentencing/evaluate", post(evaluate_handler))
        .route("/api/v1/sentencing/circumstances", get(circumstances_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<SentencingEngine>>,
    axum::Json(request): axum::Json<SentencingRequest>,
) -> Response {
    match engine.evaluate(&request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn circumstances_handler() -> Response {
    (StatusCode::OK, axum::Json(circumstance_catalog())).into_response()
}
