use dosimetry::sentencing::{CircumstanceFraction, CrimeType, JudicialCircumstance};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_circumstance(raw: &str) -> Result<JudicialCircumstance, String> {
    raw.parse()
}

pub(crate) fn parse_circumstance_fraction(raw: &str) -> Result<CircumstanceFraction, String> {
    raw.parse()
}

pub(crate) fn parse_crime_type(raw: &str) -> Result<CrimeType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "simple" => Ok(CrimeType::Simple),
        "qualified" => Ok(CrimeType::Qualified),
        other => Err(format!(
            "crime type must be 'simple' or 'qualified' (found '{other}')"
        )),
    }
}

pub(crate) fn parse_penalty(raw: &str) -> Result<f64, String> {
    let normalized = raw.trim().replace(',', ".");
    let value = normalized
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number of years ({err})"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite number of years"))
    }
}
