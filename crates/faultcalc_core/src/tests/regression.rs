//! Literal fixtures for formatted output

use crate::evaluate;

/// qF=0.1, qA=0.2, L=2, K=3
///
/// termF = 0.81, termA = 0.64, termA_raw = 0.04
/// result2 = 0.19^3 = 0.006859
/// result1 = 0.4816^3 - 0.006859 = 0.104842610496
/// result3 = 1 - 0.9676^3 = 0.094084732224
#[test]
fn test_reference_scenario() {
    let results = evaluate("0.1", "0.2", "2", "3").unwrap();

    assert_eq!(results.result1, "1.0484e-01");
    assert_eq!(results.result2, "6.8590e-03");
    assert_eq!(results.result3, "9.4085e-02");
}

#[test]
fn test_small_probabilities() {
    let results = evaluate("0.001", "0.01", "3", "5").unwrap();

    assert_eq!(results.result1, "3.6871e-08");
    assert_eq!(results.result2, "2.4179e-13");
    assert_eq!(results.result3, "4.9850e-06");
}

#[test]
fn test_larger_population() {
    let results = evaluate("0.01", "0.3", "4", "10").unwrap();

    assert_eq!(results.result1, "7.2661e-02");
    assert_eq!(results.result2, "9.0241e-15");
    assert_eq!(results.result3, "7.5140e-02");
}

#[test]
fn test_whitespace_and_real_valued_integers() {
    let padded = evaluate(" 0.1", "0.2 ", "2.0", "3.0").unwrap();
    let plain = evaluate("0.1", "0.2", "2", "3").unwrap();
    assert_eq!(padded, plain);
}
