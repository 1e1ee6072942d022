use super::domain::SubstitutionAnswers;
use super::regime::OPEN_REGIME_THRESHOLD;
use serde::Serialize;

/// Highest penalty, in years, that still allows substitution (Art. 44, I CP).
pub const SUBSTITUTION_PENALTY_LIMIT: f64 = OPEN_REGIME_THRESHOLD;

/// The four Art. 44 requirements as evaluated for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionRequirements {
    /// Penalty of at most four years (derived from the definitive penalty).
    pub penalty_within_limit: bool,
    pub non_violent: bool,
    pub non_recidivist: bool,
    pub sufficient_circumstances: bool,
}

impl SubstitutionRequirements {
    pub fn all_met(&self) -> bool {
        self.penalty_within_limit
            && self.non_violent
            && self.non_recidivist
            && self.sufficient_circumstances
    }
}

/// How the eligibility decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionPath {
    /// Every requirement met.
    Direct,
    /// Recidivist, admitted through the Art. 44 §3 exception.
    RecidivismException,
    NotEligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionEligibility {
    pub eligible: bool,
    pub path: SubstitutionPath,
    pub requirements: SubstitutionRequirements,
    /// Present only when the recidivism exception was consulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recidivism_exception: Option<bool>,
}

impl SubstitutionEligibility {
    pub fn summary(&self) -> &'static str {
        match self.path {
            SubstitutionPath::Direct => {
                "eligible to replace the custodial penalty with restrictive penalties"
            }
            SubstitutionPath::RecidivismException => {
                "eligible through the recidivism exception (Art. 44, §3 CP)"
            }
            SubstitutionPath::NotEligible => "not eligible for substitution",
        }
    }
}

pub fn evaluate_substitution(
    definitive_penalty: f64,
    answers: &SubstitutionAnswers,
) -> SubstitutionEligibility {
    let requirements = SubstitutionRequirements {
        penalty_within_limit: definitive_penalty <= SUBSTITUTION_PENALTY_LIMIT,
        non_violent: answers.non_violent,
        non_recidivist: answers.non_recidivist,
        sufficient_circumstances: answers.sufficient_circumstances,
    };

    if requirements.all_met() {
        return SubstitutionEligibility {
            eligible: true,
            path: SubstitutionPath::Direct,
            requirements,
            recidivism_exception: None,
        };
    }

    if requirements.penalty_within_limit && requirements.non_violent && !requirements.non_recidivist
    {
        let eligible = answers.recidivism_exception && requirements.sufficient_circumstances;
        return SubstitutionEligibility {
            eligible,
            path: if eligible {
                SubstitutionPath::RecidivismException
            } else {
                SubstitutionPath::NotEligible
            },
            requirements,
            recidivism_exception: Some(answers.recidivism_exception),
        };
    }

    SubstitutionEligibility {
        eligible: false,
        path: SubstitutionPath::NotEligible,
        requirements,
        recidivism_exception: None,
    }
}
