use super::config::SentencingConfig;
use super::domain::{
    AggravatingMitigatingTally, CircumstanceFraction, CrimeType, InvalidRangeError,
    JudicialCircumstance, PenaltyRange, SentencingRequest,
};
use super::fraction::FractionTally;
use super::phases::{
    base_penalty, definitive_penalty, provisional_penalty, resolve_range, BasePenaltyRule,
    BaseStage, ClampedBound, DefinitiveStage, ProvisionalStage, RangeStage,
};
use super::regime::{classify_regime, RegimeDecision};
use super::substitution::{evaluate_substitution, SubstitutionEligibility};
use serde::Serialize;
use tracing::debug;

/// Failure that aborts an evaluation before any stage output exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SentencingError {
    #[error("invalid penalty range: {0}")]
    InvalidRange(#[from] InvalidRangeError),
}

/// Penalty values in the order the stages produce them. Only the engine can build one,
/// and only after every stage has run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentencingState {
    average_term: f64,
    base_penalty: f64,
    provisional_penalty: f64,
    penalty_after_increase: f64,
    definitive_penalty: f64,
}

impl SentencingState {
    fn from_stages(
        range: &RangeStage,
        base: &BaseStage,
        provisional: &ProvisionalStage,
        definitive: &DefinitiveStage,
    ) -> Self {
        Self {
            average_term: range.average_term(),
            base_penalty: base.value(),
            provisional_penalty: provisional.value(),
            penalty_after_increase: definitive.penalty_after_increase(),
            definitive_penalty: definitive.value(),
        }
    }

    pub fn average_term(&self) -> f64 {
        self.average_term
    }

    pub fn base_penalty(&self) -> f64 {
        self.base_penalty
    }

    pub fn provisional_penalty(&self) -> f64 {
        self.provisional_penalty
    }

    pub fn penalty_after_increase(&self) -> f64 {
        self.penalty_after_increase
    }

    pub fn definitive_penalty(&self) -> f64 {
        self.definitive_penalty
    }
}

/// Output contract: every stage result plus the inputs that shaped it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentencingOutcome {
    pub crime_type: CrimeType,
    pub range: PenaltyRange,
    pub state: SentencingState,
    pub negative_circumstances: Vec<JudicialCircumstance>,
    pub negative_count: u8,
    pub circumstance_fraction: CircumstanceFraction,
    pub base_rule: BasePenaltyRule,
    pub tally: AggravatingMitigatingTally,
    pub provisional_modifier: f64,
    pub provisional_clamp: ClampedBound,
    pub increases: FractionTally,
    pub decreases: FractionTally,
    pub increase_applied: f64,
    pub decrease_applied: f64,
    pub definitive_floored: bool,
    pub regime: RegimeDecision,
    pub substitution: SubstitutionEligibility,
}

/// Stateless evaluator running the three phases, regime and substitution for one case.
#[derive(Debug, Clone, Default)]
pub struct SentencingEngine {
    config: SentencingConfig,
}

impl SentencingEngine {
    pub fn new(config: SentencingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SentencingConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        request: &SentencingRequest,
    ) -> Result<SentencingOutcome, SentencingError> {
        let range = resolve_range(request.minimum_penalty, request.maximum_penalty)?;

        let negative_circumstances = request.circumstances.negatives();
        let negative_count = request.circumstances.negative_count();
        let fraction = request
            .circumstance_fraction
            .unwrap_or(self.config.default_circumstance_fraction);
        let base = base_penalty(&range, negative_count, fraction);

        let tally = request.tally();
        let provisional = provisional_penalty(&base, &range, tally);

        let increases = FractionTally::parse(request.increase_fractions.as_slice());
        let decreases = FractionTally::parse(request.decrease_fractions.as_slice());
        let definitive = definitive_penalty(&provisional, increases, decreases);

        let state = SentencingState::from_stages(&range, &base, &provisional, &definitive);
        let regime = classify_regime(
            state.definitive_penalty(),
            request.recidivist,
            negative_count,
        );
        let substitution =
            evaluate_substitution(state.definitive_penalty(), &request.substitution);

        debug!(
            definitive_penalty = state.definitive_penalty(),
            regime = regime.category.label(),
            substitution_eligible = substitution.eligible,
            "sentencing evaluation complete"
        );

        Ok(SentencingOutcome {
            crime_type: request.crime_type,
            range: *range.range(),
            state,
            negative_circumstances,
            negative_count,
            circumstance_fraction: fraction,
            base_rule: base.rule(),
            tally,
            provisional_modifier: provisional.modifier(),
            provisional_clamp: provisional.clamp(),
            increase_applied: definitive.increase_applied(),
            decrease_applied: definitive.decrease_applied(),
            definitive_floored: definitive.floored(),
            increases: definitive.increases().clone(),
            decreases: definitive.decreases().clone(),
            regime,
            substitution,
        })
    }
}

/// Evaluate with default configuration.
pub fn evaluate(request: &SentencingRequest) -> Result<SentencingOutcome, SentencingError> {
    SentencingEngine::default().evaluate(request)
}
