//! End-to-end harness tests
//!
//! Each runtime is a real `sh` invocation so the whole path from spawn to
//! ranked report is exercised.

#![cfg(unix)]

use bench_harness::report::{publish, rank};
use bench_harness::{Engine, Harness, MemorySink, Registry, Suite, SystemRunner};
use core_types::{Measurement, MeasurementError, RuntimeSpec, GEOMETRIC_MEAN};

fn echo_runtime(name: &str, timing: &str) -> RuntimeSpec {
    // `sh -c SCRIPT FILE` runs SCRIPT with the benchmark file as $0
    let script = format!("printf '...\\n{}\\n'", timing);
    RuntimeSpec::new(name, &["sh", "-c", script.as_str()], ".bench")
}

/// Test: the Fast/Slow scenario end to end
#[test]
fn test_e2e_fast_slow() {
    let registry = Registry::new(vec![echo_runtime("Fast", "0.5"), echo_runtime("Slow", "2.0")])
        .expect("valid registry");
    let suite = Suite::new(&["x"]).expect("valid suite");
    let harness = Harness::new(&registry, &suite, Engine::new(SystemRunner::new()));

    let matrix = harness.run().expect("sweep failed");

    assert_eq!(matrix.get("x", "Fast"), Some(&Measurement::Millis(0.5)));
    assert_eq!(matrix.get("x", "Slow"), Some(&Measurement::Millis(2.0)));
    assert_eq!(matrix.get(GEOMETRIC_MEAN, "Fast"), Some(&Measurement::Millis(0.5)));
    assert_eq!(matrix.get(GEOMETRIC_MEAN, "Slow"), Some(&Measurement::Millis(2.0)));

    let report = rank(&matrix, "x").unwrap();
    let pairs: Vec<(&str, f64)> = report
        .entries
        .iter()
        .map(|e| (e.runtime.as_str(), e.measurement.millis().unwrap()))
        .collect();
    assert_eq!(pairs, vec![("Fast", 0.5), ("Slow", 2.0)]);
}

/// Test: every pair gets exactly one entry
#[test]
fn test_e2e_matrix_complete() {
    let registry = Registry::new(vec![
        echo_runtime("A", "1"),
        echo_runtime("B", "2"),
        echo_runtime("C", "3"),
    ])
    .unwrap();
    let suite = Suite::new(&["one", "two", "three"]).unwrap();
    let matrix = Harness::new(&registry, &suite, Engine::new(SystemRunner::new()))
        .run()
        .unwrap();

    assert!(matrix.missing_pairs().is_empty());
    for benchmark in suite.names() {
        assert_eq!(matrix.row(&benchmark).unwrap().len(), 3);
    }
}

/// Test: a missing interpreter fails only its own column
#[test]
fn test_e2e_missing_runtime_contained() {
    let registry = Registry::new(vec![
        RuntimeSpec::new("Ghost", &["this-runtime-does-not-exist"], ".g"),
        echo_runtime("Fast", "0.5"),
    ])
    .unwrap();
    let suite = Suite::new(&["x", "y"]).unwrap();
    let matrix = Harness::new(&registry, &suite, Engine::new(SystemRunner::new()))
        .run()
        .unwrap();

    for benchmark in ["x", "y"] {
        assert!(matches!(
            matrix.get(benchmark, "Ghost").and_then(|m| m.error()),
            Some(MeasurementError::RuntimeUnavailable { .. })
        ));
        assert_eq!(matrix.get(benchmark, "Fast"), Some(&Measurement::Millis(0.5)));
    }

    let mut sink = MemorySink::default();
    publish(&matrix, &mut sink).unwrap();
    assert_eq!(sink.charts.len(), 3);
    assert!(sink.charts.iter().all(|c| c.runtimes == vec!["Fast"]));
}

/// Test: a broken timing line fails only that pair
#[test]
fn test_e2e_parse_error_contained() {
    let registry = Registry::new(vec![
        echo_runtime("Chatty", "done"),
        echo_runtime("Fine", "4"),
    ])
    .unwrap();
    let suite = Suite::new(&["x"]).unwrap();
    let matrix = Harness::new(&registry, &suite, Engine::new(SystemRunner::new()))
        .run()
        .unwrap();

    assert!(matches!(
        matrix.get("x", "Chatty").and_then(|m| m.error()),
        Some(MeasurementError::ParseError { .. })
    ));
    assert_eq!(matrix.get(GEOMETRIC_MEAN, "Fine"), Some(&Measurement::Millis(4.0)));
    assert_eq!(
        matrix.get(GEOMETRIC_MEAN, "Chatty"),
        Some(&Measurement::Unavailable(None))
    );
}
