use super::super::domain::AggravatingMitigatingTally;
use super::base::BaseStage;
use super::range::RangeStage;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Share of the base penalty moved by each net aggravating or mitigating circumstance.
pub const MODIFIER_SHARE: f64 = 1.0 / 6.0;

/// Bound the provisional penalty was pulled back to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampedBound {
    #[default]
    None,
    /// Capped at the maximum penalty.
    Maximum,
    /// Held at the legal minimum despite net mitigation (Súmula 231, STJ).
    LegalMinimum,
}

impl ClampedBound {
    pub const fn citation(self) -> Option<&'static str> {
        match self {
            Self::LegalMinimum => Some("Súmula 231, STJ"),
            Self::None | Self::Maximum => None,
        }
    }
}

/// Second-phase result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvisionalStage {
    value: f64,
    modifier: f64,
    balance: i64,
    clamp: ClampedBound,
}

impl ProvisionalStage {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// One sixth of the base penalty.
    pub fn modifier(&self) -> f64 {
        self.modifier
    }

    /// Aggravating minus mitigating.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn clamp(&self) -> ClampedBound {
        self.clamp
    }
}

pub fn provisional_penalty(
    base: &BaseStage,
    range_stage: &RangeStage,
    tally: AggravatingMitigatingTally,
) -> ProvisionalStage {
    let range = range_stage.range();
    let base_value = base.value();
    let modifier = MODIFIER_SHARE * base_value;
    let balance = tally.balance();

    let raw = match balance.cmp(&0) {
        Ordering::Greater => base_value + modifier * balance as f64,
        Ordering::Less => base_value - modifier * balance.unsigned_abs() as f64,
        Ordering::Equal => base_value,
    };

    let (value, clamp) = if raw > range.maximum() {
        (range.maximum(), ClampedBound::Maximum)
    } else if raw < range.minimum() {
        (range.minimum(), ClampedBound::LegalMinimum)
    } else {
        (raw, ClampedBound::None)
    };

    debug!(
        balance,
        provisional_penalty = value,
        clamp = ?clamp,
        "second phase resolved"
    );

    ProvisionalStage {
        value,
        modifier,
        balance,
        clamp,
    }
}
