//! The four numeric stages of the pipeline. Each stage consumes the record produced by the
//! previous one, so a value can only be read after the stage that owns it has run.

mod base;
mod definitive;
mod provisional;
mod range;

pub use base::{base_penalty, BasePenaltyRule, BaseStage};
pub use definitive::{definitive_penalty, DefinitiveStage};
pub use provisional::{provisional_penalty, ClampedBound, ProvisionalStage};
pub use range::{resolve_range, RangeStage};
