//! Integration test suite for the benchmark harness
//!
//! This crate provides integration tests that verify components work
//! together across component boundaries, using real child processes.

/// Re-export components for test convenience
pub mod components {
    pub use bench_cli;
    pub use bench_harness;
    pub use core_types;
}
