//! Unit tests for Measurement and MeasurementError

use core_types::{Measurement, MeasurementError};
use std::cmp::Ordering;

#[test]
fn test_millis_accessors() {
    let m = Measurement::Millis(12.34);
    assert!(m.is_available());
    assert_eq!(m.millis(), Some(12.34));
    assert_eq!(m.error(), None);
    assert_eq!(m.to_string(), "12.34 ms");
}

#[test]
fn test_failed_keeps_reason() {
    let m = Measurement::failed(MeasurementError::BenchmarkFailure { exit_code: Some(1) });
    assert!(!m.is_available());
    assert_eq!(m.millis(), None);
    assert_eq!(m.error().unwrap().label(), "BenchmarkFailure");
    assert_eq!(m.to_string(), "unavailable");
}

#[test]
fn test_rank_cmp_ascending() {
    let a = Measurement::Millis(0.5);
    let b = Measurement::Millis(1.5);
    assert_eq!(a.rank_cmp(&b), Ordering::Less);
    assert_eq!(b.rank_cmp(&a), Ordering::Greater);
    assert_eq!(a.rank_cmp(&Measurement::Millis(0.5)), Ordering::Equal);
}

#[test]
fn test_serde_shape() {
    let m = Measurement::failed(MeasurementError::ParseError {
        reason: "'x' is not a number".to_string(),
    });
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(
        json,
        r#"{"unavailable":{"kind":"parse_error","reason":"'x' is not a number"}}"#
    );
    assert_eq!(
        serde_json::to_string(&Measurement::Millis(2.0)).unwrap(),
        r#"{"millis":2.0}"#
    );

    let back: Measurement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_error_display() {
    let err = MeasurementError::RuntimeUnavailable {
        reason: "failed to start 'lua'".to_string(),
    };
    assert_eq!(err.to_string(), "runtime unavailable: failed to start 'lua'");
}
