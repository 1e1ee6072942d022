//! Three-phase sentencing pipeline: committed range, base, provisional and definitive penalty,
//! followed by the initial regime and substitution eligibility.
//!
//! Each stage is a pure function of the previous stage's record. [`SentencingEngine`] threads
//! the records for one case and assembles the [`SentencingOutcome`]; nothing is shared between
//! evaluations.

pub mod config;
pub mod domain;
mod engine;
pub mod fraction;
pub mod phases;
pub mod regime;
pub mod report;
pub mod router;
pub mod substitution;

#[cfg(test)]
mod tests;

pub use config::SentencingConfig;
pub use domain::{
    AggravatingMitigatingTally, CircumstanceFraction, CrimeType, InvalidRangeError,
    JudicialCircumstance, JudicialCircumstances, PenaltyRange, SentencingRequest,
    SubstitutionAnswers,
};
pub use engine::{evaluate, SentencingEngine, SentencingError, SentencingOutcome, SentencingState};
pub use fraction::{parse_fraction, try_parse_fraction, FractionError, FractionTally};
pub use phases::ClampedBound;
pub use regime::{RegimeCategory, RegimeDecision, RegimeRule};
pub use report::{PhaseSummaryEntry, SentencingPhase, SentencingReport};
pub use router::sentencing_router;
pub use substitution::{SubstitutionEligibility, SubstitutionPath, SubstitutionRequirements};
