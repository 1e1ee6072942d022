use super::super::fraction::FractionTally;
use super::provisional::ProvisionalStage;
use tracing::debug;

/// Third-phase result: every increase is applied before any decrease.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitiveStage {
    increases: FractionTally,
    decreases: FractionTally,
    increase_applied: f64,
    penalty_after_increase: f64,
    decrease_applied: f64,
    value: f64,
    floored: bool,
}

impl DefinitiveStage {
    pub fn increases(&self) -> &FractionTally {
        &self.increases
    }

    pub fn decreases(&self) -> &FractionTally {
        &self.decreases
    }

    pub fn increase_applied(&self) -> f64 {
        self.increase_applied
    }

    pub fn penalty_after_increase(&self) -> f64 {
        self.penalty_after_increase
    }

    pub fn decrease_applied(&self) -> f64 {
        self.decrease_applied
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// True when decreases would have taken the penalty below zero.
    pub fn floored(&self) -> bool {
        self.floored
    }
}

pub fn definitive_penalty(
    provisional: &ProvisionalStage,
    increases: FractionTally,
    decreases: FractionTally,
) -> DefinitiveStage {
    let provisional_value = provisional.value();

    let increase_applied = if increases.total > 0.0 {
        saturate(provisional_value * increases.total)
    } else {
        0.0
    };
    let penalty_after_increase = saturate(provisional_value + increase_applied);

    let (decrease_applied, raw) = if decreases.total > 0.0 {
        (
            saturate(penalty_after_increase * decreases.total),
            penalty_after_increase * (1.0 - decreases.total),
        )
    } else {
        (0.0, penalty_after_increase)
    };

    let floored = raw < 0.0;
    let value = if floored { 0.0 } else { raw };

    debug!(
        total_increase = increases.total,
        total_decrease = decreases.total,
        definitive_penalty = value,
        "third phase resolved"
    );

    DefinitiveStage {
        increases,
        decreases,
        increase_applied,
        penalty_after_increase,
        decrease_applied,
        value,
        floored,
    }
}

/// Caps an overflowing product at `f64::MAX` so every stage value stays finite.
fn saturate(value: f64) -> f64 {
    value.min(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::super::base::base_penalty;
    use super::super::provisional::provisional_penalty;
    use super::super::range::resolve_range;
    use super::*;
    use crate::sentencing::domain::{AggravatingMitigatingTally, CircumstanceFraction};

    fn provisional_at(value: f64) -> ProvisionalStage {
        let range = resolve_range(value, value + 3.0).expect("valid range");
        let base = base_penalty(&range, 0, CircumstanceFraction::OneEighth);
        provisional_penalty(&base, &range, AggravatingMitigatingTally::default())
    }

    #[test]
    fn increases_apply_before_decreases() {
        let provisional = provisional_at(6.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse(&["1/2"]),
            FractionTally::parse(&["1/3"]),
        );

        assert_eq!(stage.penalty_after_increase(), 9.0);
        assert!((stage.decrease_applied() - 3.0).abs() < 1e-12);
        assert!((stage.value() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn no_fractions_leave_penalty_unchanged() {
        let provisional = provisional_at(3.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse::<&str>(&[]),
            FractionTally::parse(&["garbage"]),
        );

        assert_eq!(stage.penalty_after_increase(), 3.0);
        assert_eq!(stage.value(), 3.0);
        assert_eq!(stage.increase_applied(), 0.0);
        assert_eq!(stage.decrease_applied(), 0.0);
        assert_eq!(stage.decreases().recovered_count(), 1);
    }

    #[test]
    fn negative_increase_total_is_ignored() {
        let provisional = provisional_at(3.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse(&["-1/2"]),
            FractionTally::parse::<&str>(&[]),
        );

        assert_eq!(stage.penalty_after_increase(), 3.0);
    }

    #[test]
    fn oversized_decrease_is_floored_at_zero() {
        let provisional = provisional_at(3.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse::<&str>(&[]),
            FractionTally::parse(&["2/3", "2/3"]),
        );

        assert_eq!(stage.value(), 0.0);
        assert!(stage.floored());
    }

    #[test]
    fn overflowing_increase_survives_a_decrease() {
        let provisional = provisional_at(1.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse(&["1e308", "1e308"]),
            FractionTally::parse(&["1/2"]),
        );

        assert!(stage.increases().saturated);
        assert_eq!(stage.penalty_after_increase(), f64::MAX);
        assert!(stage.value().is_finite());
        assert!(stage.value() > 1e307);
        assert!(!stage.floored());
    }

    #[test]
    fn overflowing_decrease_is_floored_at_zero() {
        let provisional = provisional_at(3.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse::<&str>(&[]),
            FractionTally::parse(&["1e308", "1e308"]),
        );

        assert_eq!(stage.value(), 0.0);
        assert!(stage.floored());
        assert!(stage.decrease_applied().is_finite());
    }

    #[test]
    fn increases_may_exceed_the_legal_maximum() {
        let provisional = provisional_at(4.0);
        let stage = definitive_penalty(
            &provisional,
            FractionTally::parse(&["2/3", "1/3"]),
            FractionTally::parse::<&str>(&[]),
        );

        assert!((stage.value() - 8.0).abs() < 1e-12);
    }
}
