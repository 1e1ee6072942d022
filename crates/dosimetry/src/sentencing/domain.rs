use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the caller supplied the simple or the qualified penalty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrimeType {
    #[default]
    Simple,
    Qualified,
}

impl CrimeType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Qualified => "Qualified",
        }
    }
}

/// Legal penalty bounds, in years. Construct through [`PenaltyRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenaltyRange {
    minimum: f64,
    maximum: f64,
}

impl PenaltyRange {
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, InvalidRangeError> {
        if !minimum.is_finite() || !maximum.is_finite() {
            return Err(InvalidRangeError::NonFinite { minimum, maximum });
        }
        if minimum < 0.0 {
            return Err(InvalidRangeError::NegativeMinimum { minimum });
        }
        if maximum < minimum {
            return Err(InvalidRangeError::MaximumBelowMinimum { minimum, maximum });
        }

        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn interval(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn average_term(&self) -> f64 {
        (self.minimum + self.maximum) / 2.0
    }
}

/// Boundary validation failure for a [`PenaltyRange`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRangeError {
    #[error("maximum penalty ({maximum:.2}) is below the minimum penalty ({minimum:.2})")]
    MaximumBelowMinimum { minimum: f64, maximum: f64 },
    #[error("minimum penalty cannot be negative (found {minimum:.2})")]
    NegativeMinimum { minimum: f64 },
    #[error("penalty bounds must be finite numbers (minimum {minimum}, maximum {maximum})")]
    NonFinite { minimum: f64, maximum: f64 },
}

/// The eight judicial circumstances weighed in the first phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudicialCircumstance {
    Culpability,
    CriminalRecord,
    SocialConduct,
    Personality,
    Motives,
    CrimeCircumstances,
    Consequences,
    VictimBehaviour,
}

impl JudicialCircumstance {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Culpability,
            Self::CriminalRecord,
            Self::SocialConduct,
            Self::Personality,
            Self::Motives,
            Self::CrimeCircumstances,
            Self::Consequences,
            Self::VictimBehaviour,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Culpability => "culpability",
            Self::CriminalRecord => "criminal_record",
            Self::SocialConduct => "social_conduct",
            Self::Personality => "personality",
            Self::Motives => "motives",
            Self::CrimeCircumstances => "crime_circumstances",
            Self::Consequences => "consequences",
            Self::VictimBehaviour => "victim_behaviour",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Culpability => "Culpability",
            Self::CriminalRecord => "Criminal record",
            Self::SocialConduct => "Social conduct",
            Self::Personality => "Personality of the agent",
            Self::Motives => "Motives of the crime",
            Self::CrimeCircumstances => "Circumstances of the crime",
            Self::Consequences => "Consequences of the crime",
            Self::VictimBehaviour => "Behaviour of the victim",
        }
    }
}

impl FromStr for JudicialCircumstance {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ordered()
            .into_iter()
            .find(|circumstance| circumstance.key() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ordered().iter().map(|c| c.key()).collect();
                format!(
                    "unknown judicial circumstance '{raw}' (expected one of: {})",
                    known.join(", ")
                )
            })
    }
}

/// Negative flags for each judicial circumstance; unset flags count as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JudicialCircumstances {
    pub culpability: bool,
    pub criminal_record: bool,
    pub social_conduct: bool,
    pub personality: bool,
    pub motives: bool,
    pub crime_circumstances: bool,
    pub consequences: bool,
    pub victim_behaviour: bool,
}

impl JudicialCircumstances {
    pub fn from_negatives<I>(negatives: I) -> Self
    where
        I: IntoIterator<Item = JudicialCircumstance>,
    {
        let mut circumstances = Self::default();
        for circumstance in negatives {
            circumstances.mark_negative(circumstance);
        }
        circumstances
    }

    pub fn mark_negative(&mut self, circumstance: JudicialCircumstance) {
        *self.flag_mut(circumstance) = true;
    }

    pub fn is_negative(&self, circumstance: JudicialCircumstance) -> bool {
        match circumstance {
            JudicialCircumstance::Culpability => self.culpability,
            JudicialCircumstance::CriminalRecord => self.criminal_record,
            JudicialCircumstance::SocialConduct => self.social_conduct,
            JudicialCircumstance::Personality => self.personality,
            JudicialCircumstance::Motives => self.motives,
            JudicialCircumstance::CrimeCircumstances => self.crime_circumstances,
            JudicialCircumstance::Consequences => self.consequences,
            JudicialCircumstance::VictimBehaviour => self.victim_behaviour,
        }
    }

    /// Negative circumstances in statutory order.
    pub fn negatives(&self) -> Vec<JudicialCircumstance> {
        JudicialCircumstance::ordered()
            .into_iter()
            .filter(|circumstance| self.is_negative(*circumstance))
            .collect()
    }

    pub fn negative_count(&self) -> u8 {
        JudicialCircumstance::ordered()
            .into_iter()
            .filter(|circumstance| self.is_negative(*circumstance))
            .count() as u8
    }

    fn flag_mut(&mut self, circumstance: JudicialCircumstance) -> &mut bool {
        match circumstance {
            JudicialCircumstance::Culpability => &mut self.culpability,
            JudicialCircumstance::CriminalRecord => &mut self.criminal_record,
            JudicialCircumstance::SocialConduct => &mut self.social_conduct,
            JudicialCircumstance::Personality => &mut self.personality,
            JudicialCircumstance::Motives => &mut self.motives,
            JudicialCircumstance::CrimeCircumstances => &mut self.crime_circumstances,
            JudicialCircumstance::Consequences => &mut self.consequences,
            JudicialCircumstance::VictimBehaviour => &mut self.victim_behaviour,
        }
    }
}

/// Increment applied per negative circumstance when one to three are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CircumstanceFraction {
    #[default]
    #[serde(rename = "1/8")]
    OneEighth,
    #[serde(rename = "1/6")]
    OneSixth,
}

impl CircumstanceFraction {
    pub const fn value(self) -> f64 {
        match self {
            Self::OneEighth => 1.0 / 8.0,
            Self::OneSixth => 1.0 / 6.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OneEighth => "1/8",
            Self::OneSixth => "1/6",
        }
    }
}

impl fmt::Display for CircumstanceFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CircumstanceFraction {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "1/8" => Ok(Self::OneEighth),
            "1/6" => Ok(Self::OneSixth),
            other => Err(format!(
                "circumstance fraction must be '1/8' or '1/6' (found '{other}')"
            )),
        }
    }
}

/// Second-phase counts of aggravating and mitigating circumstances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggravatingMitigatingTally {
    pub aggravating: u32,
    pub mitigating: u32,
}

impl AggravatingMitigatingTally {
    /// Aggravating minus mitigating, widened so the subtraction cannot overflow.
    pub fn balance(&self) -> i64 {
        i64::from(self.aggravating) - i64::from(self.mitigating)
    }
}

/// Answers supplied for the substitution requirements the engine cannot derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionAnswers {
    /// Crime committed without violence or serious threat to a person.
    pub non_violent: bool,
    /// Defendant is not a recidivist in an intentional crime.
    pub non_recidivist: bool,
    /// Judicial circumstances indicate substitution is sufficient.
    pub sufficient_circumstances: bool,
    /// Substitution is socially recommendable and the recidivism is not for the same crime.
    pub recidivism_exception: bool,
}

impl Default for SubstitutionAnswers {
    fn default() -> Self {
        Self {
            non_violent: true,
            non_recidivist: true,
            sufficient_circumstances: true,
            recidivism_exception: false,
        }
    }
}

/// Input contract for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencingRequest {
    #[serde(default)]
    pub crime_type: CrimeType,
    pub minimum_penalty: f64,
    pub maximum_penalty: f64,
    #[serde(default)]
    pub circumstances: JudicialCircumstances,
    #[serde(default)]
    pub circumstance_fraction: Option<CircumstanceFraction>,
    #[serde(default)]
    pub aggravating_count: u32,
    #[serde(default)]
    pub mitigating_count: u32,
    #[serde(default)]
    pub increase_fractions: Vec<String>,
    #[serde(default)]
    pub decrease_fractions: Vec<String>,
    #[serde(default)]
    pub recidivist: bool,
    #[serde(default)]
    pub substitution: SubstitutionAnswers,
}

impl SentencingRequest {
    /// Request over the given bounds with every other input at its neutral value.
    pub fn new(minimum_penalty: f64, maximum_penalty: f64) -> Self {
        Self {
            crime_type: CrimeType::Simple,
            minimum_penalty,
            maximum_penalty,
            circumstances: JudicialCircumstances::default(),
            circumstance_fraction: None,
            aggravating_count: 0,
            mitigating_count: 0,
            increase_fractions: Vec::new(),
            decrease_fractions: Vec::new(),
            recidivist: false,
            substitution: SubstitutionAnswers::default(),
        }
    }

    pub fn tally(&self) -> AggravatingMitigatingTally {
        AggravatingMitigatingTally {
            aggravating: self.aggravating_count,
            mitigating: self.mitigating_count,
        }
    }
}
