use super::engine::SentencingOutcome;
use super::fraction::FractionTally;
use super::phases::{BasePenaltyRule, ClampedBound};
use super::regime::RegimeCategory;
use super::substitution::SubstitutionPath;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentencingPhase {
    CommittedPenalties,
    BasePenalty,
    ProvisionalPenalty,
    DefinitivePenalty,
}

impl SentencingPhase {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CommittedPenalties,
            Self::BasePenalty,
            Self::ProvisionalPenalty,
            Self::DefinitivePenalty,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CommittedPenalties => "Committed penalties and average term",
            Self::BasePenalty => "Phase 1: base penalty (Art. 59 CP)",
            Self::ProvisionalPenalty => "Phase 2: provisional penalty",
            Self::DefinitivePenalty => "Phase 3: definitive penalty",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummaryEntry {
    pub phase: SentencingPhase,
    pub phase_label: &'static str,
    pub value: f64,
    pub notes: Vec<String>,
}

/// Human-readable walk through an outcome, phase by phase.
#[derive(Debug, Clone, Serialize)]
pub struct SentencingReport {
    pub phases: Vec<PhaseSummaryEntry>,
    pub regime: RegimeCategory,
    pub regime_label: &'static str,
    pub regime_summary: String,
    pub substitution_eligible: bool,
    pub substitution_path: SubstitutionPath,
    pub substitution_summary: &'static str,
}

impl SentencingReport {
    pub fn from_outcome(outcome: &SentencingOutcome) -> Self {
        let phases = SentencingPhase::ordered()
            .into_iter()
            .map(|phase| PhaseSummaryEntry {
                phase,
                phase_label: phase.label(),
                value: phase_value(outcome, phase),
                notes: phase_notes(outcome, phase),
            })
            .collect();

        Self {
            phases,
            regime: outcome.regime.category,
            regime_label: outcome.regime.category.label(),
            regime_summary: outcome.regime.summary(),
            substitution_eligible: outcome.substitution.eligible,
            substitution_path: outcome.substitution.path,
            substitution_summary: outcome.substitution.summary(),
        }
    }

    pub fn phase(&self, phase: SentencingPhase) -> Option<&PhaseSummaryEntry> {
        self.phases.iter().find(|entry| entry.phase == phase)
    }
}

impl SentencingOutcome {
    pub fn report(&self) -> SentencingReport {
        SentencingReport::from_outcome(self)
    }
}

pub fn format_years(value: f64) -> String {
    format!("{value:.2} years")
}

fn phase_value(outcome: &SentencingOutcome, phase: SentencingPhase) -> f64 {
    match phase {
        SentencingPhase::CommittedPenalties => outcome.state.average_term(),
        SentencingPhase::BasePenalty => outcome.state.base_penalty(),
        SentencingPhase::ProvisionalPenalty => outcome.state.provisional_penalty(),
        SentencingPhase::DefinitivePenalty => outcome.state.definitive_penalty(),
    }
}

fn phase_notes(outcome: &SentencingOutcome, phase: SentencingPhase) -> Vec<String> {
    match phase {
        SentencingPhase::CommittedPenalties => committed_notes(outcome),
        SentencingPhase::BasePenalty => base_notes(outcome),
        SentencingPhase::ProvisionalPenalty => provisional_notes(outcome),
        SentencingPhase::DefinitivePenalty => definitive_notes(outcome),
    }
}

fn committed_notes(outcome: &SentencingOutcome) -> Vec<String> {
    vec![
        format!("{} crime", outcome.crime_type.label()),
        format!(
            "Committed penalties: {} to {}",
            format_years(outcome.range.minimum()),
            format_years(outcome.range.maximum())
        ),
    ]
}

fn base_notes(outcome: &SentencingOutcome) -> Vec<String> {
    let mut notes = Vec::new();
    if outcome.negative_circumstances.is_empty() {
        notes.push("No judicial circumstance weighed negatively".to_string());
    } else {
        let labels: Vec<&str> = outcome
            .negative_circumstances
            .iter()
            .map(|circumstance| circumstance.label())
            .collect();
        notes.push(format!(
            "{} negative circumstance(s): {}",
            outcome.negative_count,
            labels.join(", ")
        ));
    }

    match outcome.base_rule {
        BasePenaltyRule::LegalMinimum => {
            notes.push("Base penalty fixed at the minimum committed penalty".to_string())
        }
        BasePenaltyRule::Graduated {
            fraction,
            increment_per_circumstance,
            total_increment,
        } => {
            notes.push(format!(
                "Penalty interval: {}",
                format_years(outcome.range.interval())
            ));
            notes.push(format!(
                "Increase per circumstance ({fraction}): {}",
                format_years(increment_per_circumstance)
            ));
            notes.push(format!(
                "Total increase ({}x): {}",
                outcome.negative_count,
                format_years(total_increment)
            ));
        }
        BasePenaltyRule::AverageTerm => notes.push(
            "Four or more negative circumstances: base penalty set to the average term"
                .to_string(),
        ),
    }

    notes
}

fn provisional_notes(outcome: &SentencingOutcome) -> Vec<String> {
    let mut notes = vec![format!(
        "Modifier (1/6 of the base penalty): {}",
        format_years(outcome.provisional_modifier)
    )];

    let balance = outcome.tally.balance();
    let shift = outcome.provisional_modifier * balance.unsigned_abs() as f64;
    match balance.cmp(&0) {
        Ordering::Greater => notes.push(format!(
            "{} net aggravating circumstance(s): increase of {}",
            balance,
            format_years(shift)
        )),
        Ordering::Less => notes.push(format!(
            "{} net mitigating circumstance(s): reduction of {}",
            balance.unsigned_abs(),
            format_years(shift)
        )),
        Ordering::Equal => notes.push(
            "Aggravating and mitigating circumstances offset; penalty unchanged".to_string(),
        ),
    }

    match outcome.provisional_clamp {
        ClampedBound::None => {}
        ClampedBound::Maximum => {
            notes.push("Provisional penalty capped at the maximum committed penalty".to_string())
        }
        ClampedBound::LegalMinimum => notes.push(format!(
            "Provisional penalty held at the minimum committed penalty ({})",
            ClampedBound::LegalMinimum.citation().unwrap_or_default()
        )),
    }

    notes
}

fn definitive_notes(outcome: &SentencingOutcome) -> Vec<String> {
    let mut notes = vec!["Increases are applied before decreases".to_string()];

    if outcome.increases.total > 0.0 {
        notes.push(fraction_total_note("increase", &outcome.increases));
        notes.push(format!(
            "Increase applied: +{}",
            format_years(outcome.increase_applied)
        ));
        notes.push(format!(
            "Penalty after increase: {}",
            format_years(outcome.state.penalty_after_increase())
        ));
    }

    if outcome.decreases.total > 0.0 {
        notes.push(fraction_total_note("decrease", &outcome.decreases));
        notes.push(format!(
            "Reduction applied: -{}",
            format_years(outcome.decrease_applied)
        ));
    }

    for (kind, tally) in [("increase", &outcome.increases), ("decrease", &outcome.decreases)] {
        if tally.saturated {
            notes.push(format!(
                "Total {kind} fraction overflowed; capped at the largest representable value"
            ));
        }
        for entry in &tally.entries {
            if let Some(reason) = &entry.recovered_from {
                notes.push(format!("Ignored {kind} fraction: {reason}"));
            }
        }
    }

    if outcome.definitive_floored {
        notes.push("Decreases exceed the penalty; floored at zero".to_string());
    }

    notes
}

fn fraction_total_note(kind: &str, tally: &FractionTally) -> String {
    format!(
        "Total {kind} fraction: {:.2} ({:.0}%)",
        tally.total,
        tally.total * 100.0
    )
}
