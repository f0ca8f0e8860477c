//! Result matrix and aggregation properties

use bench_harness::{geometric_mean, MatrixError, Registry, ResultMatrix, Suite};
use core_types::{Measurement, MeasurementError, RuntimeSpec, GEOMETRIC_MEAN};

fn registry() -> Registry {
    Registry::new(vec![
        RuntimeSpec::new("Neptune", &["neptune"], ".np"),
        RuntimeSpec::new("Ruby", &["ruby"], ".rb"),
    ])
    .unwrap()
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_geometric_mean_examples() {
    approx(geometric_mean(&[2.0, 8.0]).unwrap(), 4.0);
    approx(geometric_mean(&[1.0, 1.0, 1.0]).unwrap(), 1.0);
    approx(geometric_mean(&[37.5]).unwrap(), 37.5);
}

#[test]
fn test_shape_follows_registry_and_suite() {
    let suite = Suite::new(&["sieve", "fib"]).unwrap();
    let matrix = ResultMatrix::new(&registry(), &suite);
    assert_eq!(matrix.benchmarks(), &["sieve".to_string(), "fib".to_string()]);
    assert_eq!(matrix.runtimes(), &["Neptune".to_string(), "Ruby".to_string()]);
    assert_eq!(matrix.missing_pairs().len(), 4);
}

#[test]
fn test_unavailable_excluded_from_mean() {
    let suite = Suite::new(&["a", "b", "c"]).unwrap();
    let mut matrix = ResultMatrix::new(&registry(), &suite);
    let cells = [
        ("a", Measurement::Millis(4.0)),
        (
            "b",
            Measurement::failed(MeasurementError::BenchmarkFailure { exit_code: Some(1) }),
        ),
        ("c", Measurement::Millis(16.0)),
    ];
    for (benchmark, m) in cells {
        matrix.record(benchmark, "Neptune", m).unwrap();
        matrix.record(benchmark, "Ruby", Measurement::Millis(1.0)).unwrap();
    }
    matrix.finalize().unwrap();

    approx(matrix.get(GEOMETRIC_MEAN, "Neptune").unwrap().millis().unwrap(), 8.0);
    approx(matrix.get(GEOMETRIC_MEAN, "Ruby").unwrap().millis().unwrap(), 1.0);
}

#[test]
fn test_finalize_rejects_incomplete() {
    let suite = Suite::new(&["a"]).unwrap();
    let mut matrix = ResultMatrix::new(&registry(), &suite);
    matrix.record("a", "Ruby", Measurement::Millis(1.0)).unwrap();
    assert!(matches!(
        matrix.finalize(),
        Err(MatrixError::Incomplete { runtime, .. }) if runtime == "Neptune"
    ));
}
