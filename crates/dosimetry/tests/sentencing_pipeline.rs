use dosimetry::sentencing::{
    evaluate, parse_fraction, CircumstanceFraction, ClampedBound, JudicialCircumstance,
    JudicialCircumstances, RegimeCategory, SentencingConfig, SentencingEngine, SentencingError,
    SentencingRequest, SubstitutionAnswers, SubstitutionPath,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn circumstances(count: usize) -> JudicialCircumstances {
    JudicialCircumstances::from_negatives(JudicialCircumstance::ordered().into_iter().take(count))
}

fn ranges() -> Vec<(f64, f64)> {
    vec![
        (0.0, 0.0),
        (0.0, 1.0),
        (0.25, 0.5),
        (1.0, 4.0),
        (2.0, 8.0),
        (4.0, 10.0),
        (6.0, 20.0),
        (12.0, 30.0),
    ]
}

#[test]
fn base_and_provisional_stay_within_range() {
    let fractions = [CircumstanceFraction::OneEighth, CircumstanceFraction::OneSixth];
    let counts = [0u32, 1, 2, 3, 5, 9, 40];

    for (minimum, maximum) in ranges() {
        for negative_count in 0..=8 {
            for fraction in fractions {
                for aggravating in counts {
                    for mitigating in counts {
                        let mut request = SentencingRequest::new(minimum, maximum);
                        request.circumstances = circumstances(negative_count);
                        request.circumstance_fraction = Some(fraction);
                        request.aggravating_count = aggravating;
                        request.mitigating_count = mitigating;

                        let outcome = evaluate(&request).expect("valid range evaluates");
                        let state = outcome.state;

                        assert!(
                            state.base_penalty() >= minimum && state.base_penalty() <= maximum,
                            "base {} outside [{minimum}, {maximum}]",
                            state.base_penalty()
                        );
                        assert!(
                            state.provisional_penalty() >= minimum
                                && state.provisional_penalty() <= maximum,
                            "provisional {} outside [{minimum}, {maximum}]",
                            state.provisional_penalty()
                        );
                        if outcome.provisional_clamp == ClampedBound::LegalMinimum {
                            assert_eq!(state.provisional_penalty(), minimum);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn definitive_penalty_is_never_negative() {
    let fraction_sets: Vec<Vec<&str>> = vec![
        vec![],
        vec!["1/3"],
        vec!["2/3", "2/3"],
        vec!["1/2", "abc", "1/0"],
        vec!["0,9", "0.9"],
        vec!["-1/2"],
        vec!["5"],
    ];

    for (minimum, maximum) in ranges() {
        for increases in &fraction_sets {
            for decreases in &fraction_sets {
                let mut request = SentencingRequest::new(minimum, maximum);
                request.circumstances = circumstances(2);
                request.aggravating_count = 1;
                request.increase_fractions = increases.iter().map(|s| s.to_string()).collect();
                request.decrease_fractions = decreases.iter().map(|s| s.to_string()).collect();

                let outcome = evaluate(&request).expect("valid range evaluates");

                assert!(outcome.state.definitive_penalty() >= 0.0);
                assert!(!outcome.state.definitive_penalty().is_nan());
            }
        }
    }
}

#[test]
fn fraction_text_examples() {
    assert_close(parse_fraction("1/3"), 1.0 / 3.0);
    assert_close(parse_fraction("2/5"), 0.4);
    assert_close(parse_fraction("0.5"), 0.5);
    assert_close(parse_fraction("0,5"), 0.5);
    assert_eq!(parse_fraction("1/0"), 0.0);
    assert_eq!(parse_fraction("abc"), 0.0);
}

#[test]
fn full_case_walkthrough() {
    let mut request = SentencingRequest::new(1.0, 4.0);
    request.circumstances = circumstances(2);
    request.circumstance_fraction = Some(CircumstanceFraction::OneEighth);
    request.aggravating_count = 1;
    request.increase_fractions = vec!["1/3".to_string()];
    request.decrease_fractions = vec!["1/2".to_string()];

    let outcome = evaluate(&request).expect("evaluation succeeds");
    let state = outcome.state;

    assert_close(state.average_term(), 2.5);
    assert_close(state.base_penalty(), 1.75);
    assert_close(state.provisional_penalty(), 1.75 * 7.0 / 6.0);
    assert_close(state.penalty_after_increase(), 1.75 * 7.0 / 6.0 * 4.0 / 3.0);
    assert_close(state.definitive_penalty(), 1.75 * 7.0 / 6.0 * 4.0 / 3.0 / 2.0);
    assert_eq!(outcome.regime.category, RegimeCategory::Open);
    assert!(outcome.substitution.eligible);
    assert_eq!(outcome.substitution.path, SubstitutionPath::Direct);
}

#[test]
fn recidivist_mid_range_case_is_closed_and_not_substitutable() {
    let mut request = SentencingRequest::new(4.0, 10.0);
    request.circumstances = circumstances(4);
    request.recidivist = true;
    request.substitution = SubstitutionAnswers {
        non_violent: true,
        non_recidivist: false,
        sufficient_circumstances: true,
        recidivism_exception: true,
    };

    let outcome = evaluate(&request).expect("evaluation succeeds");

    assert_close(outcome.state.definitive_penalty(), 7.0);
    assert_eq!(outcome.regime.category, RegimeCategory::Closed);
    assert!(!outcome.substitution.eligible);
    assert_eq!(outcome.substitution.recidivism_exception, None);
}

#[test]
fn identical_inputs_yield_identical_outputs() {
    let engine = SentencingEngine::new(SentencingConfig {
        default_circumstance_fraction: CircumstanceFraction::OneSixth,
    });
    let mut request = SentencingRequest::new(2.0, 8.0);
    request.circumstances = circumstances(3);
    request.aggravating_count = 2;
    request.mitigating_count = 1;
    request.increase_fractions = vec!["1/6".to_string(), "0,25".to_string()];
    request.decrease_fractions = vec!["1/3".to_string()];
    request.recidivist = true;

    let first = engine.evaluate(&request).expect("evaluation succeeds");
    let second = engine.evaluate(&request).expect("evaluation succeeds");

    assert_eq!(first, second);
    assert_eq!(
        first.state.definitive_penalty().to_bits(),
        second.state.definitive_penalty().to_bits()
    );
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn invalid_range_is_the_only_failure() {
    let err = evaluate(&SentencingRequest::new(5.0, 4.99)).expect_err("range rejected");
    assert!(matches!(err, SentencingError::InvalidRange(_)));

    let err = evaluate(&SentencingRequest::new(-1.0, 4.0)).expect_err("range rejected");
    assert!(matches!(err, SentencingError::InvalidRange(_)));
}

#[test]
fn request_deserializes_with_defaults() {
    let request: SentencingRequest = serde_json::from_str(
        r#"{ "minimum_penalty": 1, "maximum_penalty": 4, "circumstances": { "motives": true } }"#,
    )
    .expect("request parses");

    assert_eq!(request.circumstances.negative_count(), 1);
    assert!(request.circumstances.is_negative(JudicialCircumstance::Motives));
    assert_eq!(request.circumstance_fraction, None);
    assert!(request.increase_fractions.is_empty());
    assert_eq!(request.substitution, SubstitutionAnswers::default());

    let outcome = evaluate(&request).expect("evaluation succeeds");
    assert_close(outcome.state.base_penalty(), 1.375);
}
