//! Unit tests for the moving-average helpers

use optiscan::common::math::{ewm, ewm_dense, finite, sma_last, true_range};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_ewm_is_undefined_until_first_observation() {
    let out = ewm(&[None, Some(1.0), Some(3.0)], 0.5);
    assert_eq!(out[0], None);
    assert_eq!(out[1], Some(1.0));
    assert!(approx(out[2].unwrap(), 2.0));
}

#[test]
fn test_ewm_gap_decays_previous_weight() {
    // one gap: weights (1-a)^2 on the old mean and a on the new value
    let out = ewm(&[Some(1.0), None, Some(3.0)], 0.5);
    assert_eq!(out[1], Some(1.0));
    assert!(approx(out[2].unwrap(), (0.25 * 1.0 + 0.5 * 3.0) / 0.75));
}

#[test]
fn test_ewm_dense_matches_recursive_form() {
    let out = ewm_dense(&[2.0, 4.0, 4.0], 0.5);
    assert_eq!(out.len(), 3);
    assert!(approx(out[0], 2.0));
    assert!(approx(out[1], 3.0));
    assert!(approx(out[2], 3.5));
}

#[test]
fn test_ewm_dense_agrees_with_sparse_version_without_gaps() {
    let values = [5.0, 7.0, 6.0, 9.0, 8.5];
    let sparse: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    let dense = ewm_dense(&values, 0.2);
    for (d, s) in dense.iter().zip(ewm(&sparse, 0.2)) {
        assert!(approx(*d, s.unwrap()));
    }
}

#[test]
fn test_sma_last() {
    assert_eq!(sma_last(&[1.0, 2.0, 3.0, 4.0], 2), Some(3.5));
    assert_eq!(sma_last(&[1.0, 2.0], 3), None);
    assert_eq!(sma_last(&[1.0, 2.0], 0), None);
}

#[test]
fn test_true_range_uses_previous_close() {
    assert_eq!(true_range(10.0, 8.0, 12.0), 4.0);
    assert_eq!(true_range(10.0, 8.0, 9.0), 2.0);
    assert_eq!(true_range(10.0, 8.0, 5.0), 5.0);
}

#[test]
fn test_finite() {
    assert_eq!(finite(1.5), Some(1.5));
    assert_eq!(finite(f64::NAN), None);
    assert_eq!(finite(f64::INFINITY), None);
}
