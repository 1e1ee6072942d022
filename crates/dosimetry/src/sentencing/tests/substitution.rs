use super::common::*;
use crate::sentencing::substitution::evaluate_substitution;
use crate::sentencing::SubstitutionPath;

#[test]
fn all_requirements_met_is_direct_eligibility() {
    let eligibility = evaluate_substitution(4.0, &answers(true, true, true, false));

    assert!(eligibility.eligible);
    assert_eq!(eligibility.path, SubstitutionPath::Direct);
    assert!(eligibility.requirements.all_met());
    assert_eq!(eligibility.recidivism_exception, None);
}

#[test]
fn recidivist_is_admitted_through_exception() {
    let eligibility = evaluate_substitution(2.0, &answers(true, false, true, true));

    assert!(eligibility.eligible);
    assert_eq!(eligibility.path, SubstitutionPath::RecidivismException);
    assert_eq!(eligibility.recidivism_exception, Some(true));
}

#[test]
fn exception_still_requires_sufficient_circumstances() {
    let eligibility = evaluate_substitution(2.0, &answers(true, false, false, true));

    assert!(!eligibility.eligible);
    assert_eq!(eligibility.path, SubstitutionPath::NotEligible);
    assert_eq!(eligibility.recidivism_exception, Some(true));
}

#[test]
fn recidivist_without_exception_is_not_eligible() {
    let eligibility = evaluate_substitution(2.0, &answers(true, false, true, false));

    assert!(!eligibility.eligible);
    assert_eq!(eligibility.recidivism_exception, Some(false));
}

#[test]
fn exception_is_not_consulted_outside_its_path() {
    let too_long = evaluate_substitution(4.5, &answers(true, false, true, true));
    assert!(!too_long.eligible);
    assert_eq!(too_long.recidivism_exception, None);

    let violent = evaluate_substitution(2.0, &answers(false, false, true, true));
    assert!(!violent.eligible);
    assert_eq!(violent.recidivism_exception, None);

    let insufficient = evaluate_substitution(2.0, &answers(true, true, false, true));
    assert!(!insufficient.eligible);
    assert_eq!(insufficient.path, SubstitutionPath::NotEligible);
    assert_eq!(insufficient.recidivism_exception, None);
}
