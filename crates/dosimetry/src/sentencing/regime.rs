use serde::Serialize;
use tracing::debug;

/// Penalties above this many years always start in the closed regime.
pub const CLOSED_REGIME_THRESHOLD: f64 = 8.0;
/// Penalties up to this many years may start in the open regime.
pub const OPEN_REGIME_THRESHOLD: f64 = 4.0;

/// Initial incarceration regime (Art. 33 CP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimeCategory {
    Closed,
    SemiOpen,
    Open,
}

impl RegimeCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::SemiOpen => "Semi-open",
            Self::Open => "Open",
        }
    }
}

/// The classification rule that settled the regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimeRule {
    PenaltyAboveEightYears,
    RecidivistAboveFourYears,
    FirstOffenderAboveFourYears,
    RecidivistFavourableCircumstances,
    RecidivistUnfavourableCircumstances,
    FirstOffenderUpToFourYears,
    FirstOffenderMinimumBaseOverride,
}

impl RegimeRule {
    pub const fn citation(self) -> Option<&'static str> {
        match self {
            Self::RecidivistFavourableCircumstances => Some("Súmula 269, STJ"),
            Self::FirstOffenderMinimumBaseOverride => Some("Súmula 440, STJ"),
            _ => None,
        }
    }

    pub const fn qualifier(self) -> Option<&'static str> {
        match self {
            Self::RecidivistUnfavourableCircumstances => {
                Some("may be Closed if judicial circumstances are unfavourable")
            }
            Self::FirstOffenderMinimumBaseOverride => {
                Some("base penalty at the legal minimum and first-time offender")
            }
            _ => None,
        }
    }
}

/// Regime category plus the rule and citation that justify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeDecision {
    pub category: RegimeCategory,
    pub rule: RegimeRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<&'static str>,
    pub override_applied: bool,
}

impl RegimeDecision {
    fn from_rule(category: RegimeCategory, rule: RegimeRule) -> Self {
        Self {
            category,
            rule,
            citation: rule.citation(),
            qualifier: rule.qualifier(),
            override_applied: rule == RegimeRule::FirstOffenderMinimumBaseOverride,
        }
    }

    /// Category with its qualifier or citation, e.g. `Semi-open (Súmula 269, STJ)`.
    pub fn summary(&self) -> String {
        match (self.citation, self.qualifier) {
            (Some(citation), _) => format!("{} ({})", self.category.label(), citation),
            (None, Some(qualifier)) => format!("{} ({})", self.category.label(), qualifier),
            (None, None) => self.category.label().to_string(),
        }
    }
}

pub fn classify_regime(
    definitive_penalty: f64,
    recidivist: bool,
    negative_count: u8,
) -> RegimeDecision {
    let decision = if definitive_penalty > CLOSED_REGIME_THRESHOLD {
        RegimeDecision::from_rule(RegimeCategory::Closed, RegimeRule::PenaltyAboveEightYears)
    } else if definitive_penalty > OPEN_REGIME_THRESHOLD {
        if recidivist {
            RegimeDecision::from_rule(RegimeCategory::Closed, RegimeRule::RecidivistAboveFourYears)
        } else {
            RegimeDecision::from_rule(
                RegimeCategory::SemiOpen,
                RegimeRule::FirstOffenderAboveFourYears,
            )
        }
    } else if recidivist {
        if negative_count == 0 {
            RegimeDecision::from_rule(
                RegimeCategory::SemiOpen,
                RegimeRule::RecidivistFavourableCircumstances,
            )
        } else {
            RegimeDecision::from_rule(
                RegimeCategory::SemiOpen,
                RegimeRule::RecidivistUnfavourableCircumstances,
            )
        }
    } else {
        RegimeDecision::from_rule(RegimeCategory::Open, RegimeRule::FirstOffenderUpToFourYears)
    };

    let decision =
        apply_minimum_base_override(decision, definitive_penalty, recidivist, negative_count);

    debug!(
        definitive_penalty,
        recidivist,
        regime = decision.category.label(),
        "regime classified"
    );
    decision
}

// Súmula 440. The first-offender branch above already yields Open under the same guard.
fn apply_minimum_base_override(
    decision: RegimeDecision,
    definitive_penalty: f64,
    recidivist: bool,
    negative_count: u8,
) -> RegimeDecision {
    if negative_count == 0
        && !recidivist
        && decision.category != RegimeCategory::Open
        && definitive_penalty <= OPEN_REGIME_THRESHOLD
    {
        return RegimeDecision::from_rule(
            RegimeCategory::Open,
            RegimeRule::FirstOffenderMinimumBaseOverride,
        );
    }

    decision
}
