//! Runtime and benchmark case descriptions.

use serde::{Deserialize, Serialize};

/// A language runtime the harness can invoke.
///
/// The invocation holds the program followed by its fixed arguments. The
/// benchmark file name (`case name + file_suffix`) is appended to it when a
/// benchmark is run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Display name, unique across a registry
    pub name: String,
    /// Program followed by fixed arguments
    pub invocation: Vec<String>,
    /// Suffix selecting this runtime's source file, e.g. `.js`
    pub file_suffix: String,
}

impl RuntimeSpec {
    /// Create a runtime spec from borrowed parts
    pub fn new(name: &str, invocation: &[&str], file_suffix: &str) -> Self {
        Self {
            name: name.to_string(),
            invocation: invocation.iter().map(|s| s.to_string()).collect(),
            file_suffix: file_suffix.to_string(),
        }
    }

    /// The executable, if the invocation is non-empty
    pub fn program(&self) -> Option<&str> {
        self.invocation.first().map(String::as_str)
    }

    /// Source file name for a benchmark case under this runtime
    pub fn file_name(&self, case: &BenchmarkCase) -> String {
        format!("{}{}", case.name, self.file_suffix)
    }

    /// Full command line for running `case` under this runtime
    pub fn command_for(&self, case: &BenchmarkCase) -> Vec<String> {
        let mut command = self.invocation.clone();
        command.push(self.file_name(case));
        command
    }
}

/// A named benchmark program, implemented once per runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkCase {
    /// Case name, unique within a suite
    pub name: String,
}

impl BenchmarkCase {
    /// Create a benchmark case
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
