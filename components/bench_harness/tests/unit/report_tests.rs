//! Ranking and publishing tests

use bench_harness::report::{format_results, publish, rank_all};
use bench_harness::{rank, MemorySink, ResultMatrix, AXIS_LABEL};
use core_types::{Measurement, MeasurementError, GEOMETRIC_MEAN};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn finished_matrix() -> ResultMatrix {
    let mut m = ResultMatrix::with_names(names(&["fib", "sieve"]), names(&["A", "B", "C"]));
    m.record("fib", "A", Measurement::Millis(1.5)).unwrap();
    m.record("fib", "B", Measurement::Millis(0.5)).unwrap();
    m.record("fib", "C", Measurement::Millis(0.5)).unwrap();
    m.record("sieve", "A", Measurement::Millis(6.0)).unwrap();
    m.record(
        "sieve",
        "B",
        Measurement::failed(MeasurementError::ParseError {
            reason: "'done' is not a number".to_string(),
        }),
    )
    .unwrap();
    m.record("sieve", "C", Measurement::Millis(2.0)).unwrap();
    m.finalize().unwrap();
    m
}

#[test]
fn test_ties_keep_registry_order() {
    let report = rank(&finished_matrix(), "fib").unwrap();
    assert_eq!(report.runtimes(), vec!["B", "C", "A"]);
}

#[test]
fn test_rank_all_appends_aggregate() {
    let reports = rank_all(&finished_matrix());
    let titles: Vec<&str> = reports.iter().map(|r| r.benchmark.as_str()).collect();
    assert_eq!(titles, vec!["fib", "sieve", GEOMETRIC_MEAN]);

    // A: sqrt(1.5 * 6) = 3, B: 0.5 alone, C: sqrt(0.5 * 2) = 1
    assert_eq!(reports[2].runtimes(), vec!["B", "C", "A"]);
}

#[test]
fn test_publish_uses_available_data_only() {
    let mut sink = MemorySink::default();
    publish(&finished_matrix(), &mut sink).unwrap();

    let sieve = &sink.charts[1];
    assert_eq!(sieve.title, "sieve");
    assert_eq!(sieve.runtimes, vec!["C", "A"]);
    assert_eq!(sieve.durations, vec![2.0, 6.0]);
    assert!(sink.charts.iter().all(|c| c.axis_label == AXIS_LABEL));
}

#[test]
fn test_failed_pair_visible_in_table() {
    let table = format_results(&finished_matrix());
    assert!(table.contains("Geometric Mean"));
    assert!(table.contains("'done' is not a number"));
}
