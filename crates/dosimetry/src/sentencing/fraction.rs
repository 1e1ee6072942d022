use serde::Serialize;
use tracing::{debug, warn};

/// Reason a fraction text could not be read. Never surfaced as a failure: callers
/// coerce it to a zero adjustment through [`parse_fraction`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FractionError {
    #[error("fraction text is empty")]
    Empty,
    #[error("'{0}' is not a number or an 'n/d' fraction")]
    Malformed(String),
    #[error("'{0}' has a zero denominator")]
    ZeroDenominator(String),
    #[error("'{0}' does not evaluate to a finite number")]
    NonFinite(String),
}

/// Strict reading of a fraction: `"n/d"` or a decimal using `.` or `,` as separator.
pub fn try_parse_fraction(raw: &str) -> Result<f64, FractionError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(FractionError::Empty);
    }

    let value = match text.split_once('/') {
        Some((numerator, denominator)) => {
            if denominator.contains('/') {
                return Err(FractionError::Malformed(text.to_string()));
            }
            let numerator = parse_decimal(numerator.trim(), text)?;
            let denominator = parse_decimal(denominator.trim(), text)?;
            if denominator == 0.0 {
                return Err(FractionError::ZeroDenominator(text.to_string()));
            }
            numerator / denominator
        }
        None => parse_decimal(&text.replace(',', "."), text)?,
    };

    if !value.is_finite() {
        return Err(FractionError::NonFinite(text.to_string()));
    }

    Ok(value)
}

/// Lenient reading used by the third phase: anything unreadable contributes 0.
pub fn parse_fraction(raw: &str) -> f64 {
    try_parse_fraction(raw).unwrap_or_else(|err| {
        log_recovery(&err);
        0.0
    })
}

fn log_recovery(err: &FractionError) {
    match err {
        FractionError::Empty => debug!("empty fraction entry treated as 0"),
        other => warn!(err = %other, "unparseable fraction treated as 0"),
    }
}

fn parse_decimal(part: &str, whole: &str) -> Result<f64, FractionError> {
    part.parse::<f64>()
        .map_err(|_| FractionError::Malformed(whole.to_string()))
}

/// One entry of a fraction list after parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedFraction {
    pub source: String,
    pub value: f64,
    /// Set when the text was unreadable and coerced to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovered_from: Option<String>,
}

/// Ordered list of parsed fractions and their sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionTally {
    pub entries: Vec<ParsedFraction>,
    /// Always finite: a sum past `f64::MAX` saturates and sets `saturated`.
    pub total: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub saturated: bool,
}

impl FractionTally {
    pub fn parse<S>(sources: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let entries: Vec<ParsedFraction> = sources
            .iter()
            .map(|source| {
                let source = source.as_ref();
                let (value, recovered_from) = match try_parse_fraction(source) {
                    Ok(value) => (value, None),
                    Err(err) => {
                        log_recovery(&err);
                        (0.0, Some(err.to_string()))
                    }
                };
                ParsedFraction {
                    source: source.to_string(),
                    value,
                    recovered_from,
                }
            })
            .collect();

        let sum: f64 = entries.iter().map(|entry| entry.value).sum();
        let saturated = !sum.is_finite();
        let total = if saturated {
            warn!(entries = entries.len(), "fraction sum overflowed; saturated at f64::MAX");
            sum.clamp(-f64::MAX, f64::MAX)
        } else {
            sum
        };

        Self {
            entries,
            total,
            saturated,
        }
    }

    pub fn recovered_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.recovered_from.is_some())
            .count()
    }
}
