//! End-to-End CLI Integration Tests
//!
//! Drives the `xbench` run routine with a YAML config and checks the JSON
//! it emits.

#![cfg(unix)]

use bench_cli::{run, Cli};
use clap::Parser;
use std::fs;
use std::path::Path;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("xbench.yaml");
    fs::write(&path, body).unwrap();
    path
}

fn run_json(args: &[&str]) -> (bool, serde_json::Value) {
    let mut argv = vec!["xbench", "--json", "--no-charts"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("valid arguments");

    let mut out = Vec::new();
    let ok = run(&cli, &mut out).expect("run failed");
    let json = serde_json::from_slice(&out).expect("valid JSON output");
    (ok, json)
}

/// Test: JSON output ranks runtimes and appends the aggregate
#[test]
fn test_e2e_cli_json_ranking() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fib.sh"), "echo 832040\necho 8\n").unwrap();
    fs::write(dir.path().join("fib.bash"), "echo 832040\necho 2\n").unwrap();
    fs::write(dir.path().join("ack.sh"), "echo 2\n").unwrap();
    fs::write(dir.path().join("ack.bash"), "echo 8\n").unwrap();
    let config = write_config(
        dir.path(),
        "runtimes:\n  - {name: Sh, invocation: [sh], file_suffix: .sh}\n  - {name: Bash, invocation: [sh], file_suffix: .bash}\nbenchmarks: [fib, ack]\n",
    );
    let bench_dir = dir.path().to_str().unwrap();

    let (ok, json) = run_json(&["--config", config.to_str().unwrap(), "--bench-dir", bench_dir]);

    assert!(ok);
    assert_eq!(json["timing"], "self_reported");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["benchmark"], "fib");
    assert_eq!(results[0]["entries"][0]["runtime"], "Bash");
    assert_eq!(results[1]["entries"][0]["runtime"], "Sh");

    // Both runtimes score sqrt(2 * 8) = 4; the tie keeps registry order
    assert_eq!(results[2]["benchmark"], "Geometric Mean");
    assert_eq!(results[2]["entries"][0]["runtime"], "Sh");
    let mean = results[2]["entries"][0]["measurement"]["millis"].as_f64().unwrap();
    assert!((mean - 4.0).abs() < 1e-9);
}

/// Test: discovery plus a wall-clock run reports failures without aborting
#[test]
fn test_e2e_cli_discover_wall_clock() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ok.sh"), "true\n").unwrap();
    fs::write(dir.path().join("bad.sh"), "exit 7\n").unwrap();
    let config = write_config(
        dir.path(),
        "runtimes:\n  - {name: Sh, invocation: [sh], file_suffix: .sh}\nbenchmarks: [unused]\n",
    );

    let (ok, json) = run_json(&[
        "--config",
        config.to_str().unwrap(),
        "--bench-dir",
        dir.path().to_str().unwrap(),
        "--discover",
        "--mode",
        "wall-clock",
    ]);

    assert!(!ok);
    assert_eq!(json["timing"], "wall_clock");
    let failures = json["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["benchmark"], "bad");
    assert_eq!(failures[0]["error"]["kind"], "benchmark_failure");
    assert_eq!(failures[0]["error"]["exit_code"], 7);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["benchmark"], "bad");
    assert_eq!(results[1]["benchmark"], "ok");
    assert!(results[1]["entries"][0]["measurement"]["millis"].as_f64().unwrap() >= 0.0);
}
