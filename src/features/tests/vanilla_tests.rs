//! Tests for the summary statistics extractor.

use ndarray::{Array1, array};

use crate::features::{SummaryStatistics, VanillaFeatureExtractor};

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn test_known_vector() {
    let data = array![1.0, 2.0, 3.0, 4.0, 5.0];
    let features: Vec<SummaryStatistics> = VanillaFeatureExtractor::new().extract(&data).collect();

    assert_eq!(features.len(), 1, "exactly one feature vector");
    let stats = features[0];
    assert!(approx_eq(stats.mean, 3.0));
    assert!(approx_eq(stats.variance, 2.0));
    assert!(approx_eq(stats.std_dev, 2.0f64.sqrt()));
    assert!((stats.std_dev - 1.4142).abs() < 1e-4);
}

#[test]
fn test_iterator_is_single_pass() {
    let data = array![4.0, 4.0];
    let mut features = VanillaFeatureExtractor.extract(&data);

    let first = features.next().expect("one item");
    assert_eq!(first.to_array(), [4.0, 0.0, 0.0]);
    assert!(features.next().is_none());
    assert!(features.next().is_none());
}

#[test]
fn test_population_statistics_over_band_stack() {
    // Divisor is N over every value, regardless of dimensionality
    let data = array![[[0u16, 2], [4, 6]], [[8, 10], [12, 14]]];
    let stats = VanillaFeatureExtractor
        .extract(&data)
        .next()
        .expect("one item");

    assert!(approx_eq(stats.mean, 7.0));
    // Squared deviations: 49 25 9 1 1 9 25 49 -> 168 / 8
    assert!(approx_eq(stats.variance, 21.0));
    assert!(approx_eq(stats.std_dev, 21.0f64.sqrt()));
}

#[test]
fn test_empty_input_is_nan() {
    let data = Array1::<f32>::zeros(0);
    let stats = VanillaFeatureExtractor
        .extract(&data)
        .next()
        .expect("one item");

    assert!(stats.mean.is_nan());
    assert!(stats.std_dev.is_nan());
    assert!(stats.variance.is_nan());
}

#[test]
fn test_statistics_serialize() {
    let stats = SummaryStatistics::from_values(&array![1.0, 3.0]);
    let json = serde_json::to_string(&stats).expect("serialize");
    assert_eq!(json, r#"{"mean":2.0,"std_dev":1.0,"variance":1.0}"#);
}

#[test]
fn test_empty_statistics_roundtrip() {
    let stats = SummaryStatistics::from_values(&Array1::<f64>::zeros(0));
    let json = serde_json::to_string(&stats).expect("serialize");
    assert_eq!(json, r#"{"mean":"NaN","std_dev":"NaN","variance":"NaN"}"#);

    let parsed: SummaryStatistics = serde_json::from_str(&json).expect("parse");
    assert!(parsed.to_array().iter().all(|v| v.is_nan()));
}
