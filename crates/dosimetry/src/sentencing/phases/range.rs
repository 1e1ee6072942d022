use super::super::domain::{InvalidRangeError, PenaltyRange};

/// Validated range together with its midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStage {
    range: PenaltyRange,
    average_term: f64,
}

impl RangeStage {
    pub fn range(&self) -> &PenaltyRange {
        &self.range
    }

    pub fn average_term(&self) -> f64 {
        self.average_term
    }
}

pub fn resolve_range(minimum: f64, maximum: f64) -> Result<RangeStage, InvalidRangeError> {
    let range = PenaltyRange::new(minimum, maximum)?;
    Ok(RangeStage {
        average_term: range.average_term(),
        range,
    })
}
