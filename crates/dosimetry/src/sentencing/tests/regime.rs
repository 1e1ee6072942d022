use super::common::*;
use crate::sentencing::regime::classify_regime;
use crate::sentencing::{RegimeCategory, RegimeRule};

#[test]
fn penalties_above_eight_years_are_closed_regardless_of_recidivism() {
    for recidivist in [false, true] {
        let decision = classify_regime(9.0, recidivist, 0);
        assert_eq!(decision.category, RegimeCategory::Closed);
        assert_eq!(decision.rule, RegimeRule::PenaltyAboveEightYears);
    }
}

#[test]
fn between_four_and_eight_depends_on_recidivism() {
    let first_offender = classify_regime(6.0, false, 3);
    assert_eq!(first_offender.category, RegimeCategory::SemiOpen);

    let recidivist = classify_regime(6.0, true, 3);
    assert_eq!(recidivist.category, RegimeCategory::Closed);

    let boundary = classify_regime(8.0, false, 0);
    assert_eq!(boundary.category, RegimeCategory::SemiOpen);
}

#[test]
fn recidivist_up_to_four_years_is_semi_open() {
    let favourable = classify_regime(3.0, true, 0);
    assert_eq!(favourable.category, RegimeCategory::SemiOpen);
    assert_eq!(favourable.citation, Some("Súmula 269, STJ"));
    assert!(favourable.qualifier.is_none());

    let unfavourable = classify_regime(4.0, true, 1);
    assert_eq!(unfavourable.category, RegimeCategory::SemiOpen);
    assert_eq!(unfavourable.rule, RegimeRule::RecidivistUnfavourableCircumstances);
    assert!(unfavourable.citation.is_none());
    assert!(unfavourable
        .qualifier
        .expect("qualifier present")
        .contains("may be Closed"));
}

#[test]
fn first_offender_up_to_four_years_is_open_without_override() {
    let decision = classify_regime(3.0, false, 0);

    assert_eq!(decision.category, RegimeCategory::Open);
    assert_eq!(decision.rule, RegimeRule::FirstOffenderUpToFourYears);
    assert!(!decision.override_applied);
}

#[test]
fn evaluated_case_of_three_years_is_open_and_substitutable() {
    let mut request = simple_request();
    request.minimum_penalty = 3.0;
    request.maximum_penalty = 6.0;

    let outcome = engine().evaluate(&request).expect("evaluation succeeds");

    assert_close(outcome.state.definitive_penalty(), 3.0);
    assert_eq!(outcome.regime.category, RegimeCategory::Open);
    assert!(outcome.substitution.requirements.penalty_within_limit);
}

#[test]
fn evaluated_case_of_nine_years_is_closed() {
    let mut request = simple_request();
    request.minimum_penalty = 9.0;
    request.maximum_penalty = 12.0;

    let outcome = engine().evaluate(&request).expect("evaluation succeeds");

    assert_eq!(outcome.regime.category, RegimeCategory::Closed);
    assert!(!outcome.substitution.requirements.penalty_within_limit);
    assert!(!outcome.substitution.eligible);
}
