use axum::response::Response;
use serde_json::Value;

use crate::sentencing::domain::{
    CircumstanceFraction, JudicialCircumstance, JudicialCircumstances, SentencingRequest,
    SubstitutionAnswers,
};
use crate::sentencing::{SentencingConfig, SentencingEngine};

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn engine() -> SentencingEngine {
    SentencingEngine::new(SentencingConfig {
        default_circumstance_fraction: CircumstanceFraction::OneEighth,
    })
}

/// Range [1, 4] with nothing weighed against the defendant.
pub(super) fn simple_request() -> SentencingRequest {
    SentencingRequest::new(1.0, 4.0)
}

pub(super) fn negatives(count: usize) -> JudicialCircumstances {
    JudicialCircumstances::from_negatives(JudicialCircumstance::ordered().into_iter().take(count))
}

pub(super) fn answers(
    non_violent: bool,
    non_recidivist: bool,
    sufficient_circumstances: bool,
    recidivism_exception: bool,
) -> SubstitutionAnswers {
    SubstitutionAnswers {
        non_violent,
        non_recidivist,
        sufficient_circumstances,
        recidivism_exception,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
