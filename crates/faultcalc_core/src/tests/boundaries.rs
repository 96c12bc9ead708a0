//! Behavior at the edges of the parameter domain

use crate::config::ClampPolicy;
use crate::error::{InputError, InputField};
use crate::evaluate::{compute, evaluate};
use crate::model::ModelParams;

#[test]
fn test_no_failures_no_attacks() {
    let params = ModelParams::new(0.0, 0.0, 2.0, 1.0).unwrap();
    let metrics = compute(&params, ClampPolicy::PassThrough);

    assert_eq!(metrics.result1, 0.0);
    assert_eq!(metrics.result2, 0.0);
    assert_eq!(metrics.result3, 0.0);

    let results = evaluate("0", "0", "2", "1000").unwrap();
    assert_eq!(results.result1, "0.0000e+00");
    assert_eq!(results.result2, "0.0000e+00");
    assert_eq!(results.result3, "0.0000e+00");
}

#[test]
fn test_certain_failure() {
    for q_a in [0.0, 0.3, 1.0] {
        let params = ModelParams::new(1.0, q_a, 3.0, 4.0).unwrap();
        let metrics = compute(&params, ClampPolicy::PassThrough);

        assert_eq!(metrics.result2, 1.0, "qA={q_a}");
        assert_eq!(metrics.result1, 0.0, "qA={q_a}");
        assert_eq!(metrics.result3, 0.0, "qA={q_a}");
    }

    let results = evaluate("1", "0.5", "3", "4").unwrap();
    assert_eq!(results.result2, "1.0000e+00");
    assert_eq!(results.result1, "0.0000e+00");
}

#[test]
fn test_minimum_group_size_and_count() {
    assert!(evaluate("0.5", "0.5", "2", "1").is_ok());
    assert_eq!(
        evaluate("0.5", "0.5", "1", "1").unwrap_err(),
        InputError::GroupSize(1.0)
    );
    assert_eq!(
        evaluate("0.5", "0.5", "2", "0").unwrap_err(),
        InputError::GroupCount(0.0)
    );
}

#[test]
fn test_fractional_group_size_rejected() {
    let err = evaluate("0.1", "0.2", "2.5", "3").unwrap_err();
    assert_eq!(err, InputError::GroupSize(2.5));
    assert_eq!(
        err.user_message(),
        "Error: L must be an integer greater than or equal to 2."
    );
}

#[test]
fn test_out_of_range_probability_rejected() {
    let err = evaluate("1.5", "0.2", "2", "3").unwrap_err();
    assert_eq!(err, InputError::Range { q_f: 1.5, q_a: 0.2 });
    assert_eq!(err.user_message(), "Error: qF and qA must be between 0 and 1.");
}

#[test]
fn test_non_numeric_rejected() {
    let err = evaluate("0.1", "0.2", "2", "three").unwrap_err();
    assert_eq!(err.field(), Some(InputField::GroupCount));
    assert_eq!(
        err.user_message(),
        "Error: Invalid input. Please enter numeric values."
    );
}

#[test]
fn test_huge_group_count_stays_finite() {
    let results = evaluate("0.5", "0.5", "2", "1e30").unwrap();
    assert_eq!(results.result2, "0.0000e+00");
    assert_eq!(results.result3, "1.0000e+00");
}

#[test]
fn test_group_size_error_reported_before_group_count() {
    assert_eq!(
        evaluate("0.1", "0.2", "1", "0").unwrap_err(),
        InputError::GroupSize(1.0)
    );
    assert_eq!(
        evaluate("0.1", "0.2", "2.5", "0.5").unwrap_err(),
        InputError::GroupSize(2.5)
    );
}

#[test]
fn test_overflowing_input_gets_domain_error() {
    let err = evaluate("1e400", "0.2", "2", "3").unwrap_err();
    assert!(matches!(err, InputError::Range { .. }), "{err:?}");
    assert_eq!(err.user_message(), "Error: qF and qA must be between 0 and 1.");

    assert_eq!(
        evaluate("0.1", "inf", "2", "3").unwrap_err().user_message(),
        "Error: qF and qA must be between 0 and 1."
    );

    let err = evaluate("0.1", "0.2", "1e400", "3").unwrap_err();
    assert_eq!(err, InputError::GroupSize(f64::INFINITY));

    let err = evaluate("0.1", "0.2", "2", "-inf").unwrap_err();
    assert_eq!(err, InputError::GroupCount(f64::NEG_INFINITY));
}

#[test]
fn test_digit_separators_accepted() {
    assert_eq!(
        evaluate("0.1", "0.2", "2", "1_0").unwrap(),
        evaluate("0.1", "0.2", "2", "10").unwrap()
    );
}
