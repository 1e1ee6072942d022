use super::domain::CircumstanceFraction;
use serde::{Deserialize, Serialize};

/// Engine defaults applied when a request leaves an input unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentencingConfig {
    pub default_circumstance_fraction: CircumstanceFraction,
}
