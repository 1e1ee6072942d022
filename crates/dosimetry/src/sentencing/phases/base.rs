use super::super::domain::CircumstanceFraction;
use super::range::RangeStage;
use serde::Serialize;
use tracing::debug;

/// Negative circumstances from which the base penalty moves to the average term.
pub const AVERAGE_TERM_THRESHOLD: u8 = 4;

/// Which first-phase rule produced the base penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum BasePenaltyRule {
    /// No negative circumstance: the legal minimum.
    LegalMinimum,
    /// One to three negative circumstances, each adding a fraction of the interval.
    Graduated {
        fraction: CircumstanceFraction,
        increment_per_circumstance: f64,
        total_increment: f64,
    },
    /// Four or more negative circumstances: the average term.
    AverageTerm,
}

/// First-phase result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStage {
    value: f64,
    negative_count: u8,
    rule: BasePenaltyRule,
    clamped: bool,
}

impl BaseStage {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn negative_count(&self) -> u8 {
        self.negative_count
    }

    pub fn rule(&self) -> BasePenaltyRule {
        self.rule
    }

    /// True when the raw result fell outside the range and was pulled back.
    pub fn clamped(&self) -> bool {
        self.clamped
    }
}

pub fn base_penalty(
    range_stage: &RangeStage,
    negative_count: u8,
    fraction: CircumstanceFraction,
) -> BaseStage {
    let range = range_stage.range();

    let (raw, rule) = match negative_count {
        0 => (range.minimum(), BasePenaltyRule::LegalMinimum),
        count if count < AVERAGE_TERM_THRESHOLD => {
            let increment_per_circumstance = fraction.value() * range.interval();
            let total_increment = increment_per_circumstance * f64::from(count);
            (
                range.minimum() + total_increment,
                BasePenaltyRule::Graduated {
                    fraction,
                    increment_per_circumstance,
                    total_increment,
                },
            )
        }
        _ => (range_stage.average_term(), BasePenaltyRule::AverageTerm),
    };

    let value = raw.clamp(range.minimum(), range.maximum());
    let stage = BaseStage {
        value,
        negative_count,
        rule,
        clamped: value != raw,
    };

    debug!(negative_count, base_penalty = value, "first phase resolved");
    stage
}
