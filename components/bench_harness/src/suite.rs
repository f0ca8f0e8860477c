//! Benchmark suite
//!
//! Ordered list of benchmark case names. Order only affects iteration and
//! display.

use crate::registry::Registry;
use core_types::{BenchmarkCase, ConfigError, GEOMETRIC_MEAN};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use walkdir::WalkDir;

/// Ordered collection of uniquely named benchmark cases
#[derive(Debug, Clone)]
pub struct Suite {
    cases: Vec<BenchmarkCase>,
}

impl Suite {
    /// Build a suite from case names
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut cases = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName("benchmark"));
            }
            if name == GEOMETRIC_MEAN {
                return Err(ConfigError::ReservedName(name.to_string()));
            }
            if !seen.insert(name.to_string()) {
                return Err(ConfigError::DuplicateBenchmark(name.to_string()));
            }
            cases.push(BenchmarkCase::new(name));
        }
        Ok(Self { cases })
    }

    /// Find benchmark sources directly inside `dir`
    ///
    /// Every file whose name ends with a registered suffix contributes its
    /// stem. Stems are sorted so discovery is deterministic.
    pub fn discover<P: AsRef<Path>>(dir: P, registry: &Registry) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ConfigError::NotADirectory(dir.display().to_string()));
        }

        let suffixes = registry.suffixes();
        let mut stems = BTreeSet::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ConfigError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            for suffix in &suffixes {
                if let Some(stem) = file_name.strip_suffix(*suffix) {
                    if !stem.is_empty() {
                        stems.insert(stem.to_string());
                    }
                }
            }
        }

        let names: Vec<String> = stems.into_iter().collect();
        Self::new(&names)
    }

    /// Keep only the named cases, preserving suite order
    pub fn retain(&self, names: &[String]) -> Result<Self, ConfigError> {
        if let Some(unknown) = names
            .iter()
            .find(|n| !self.cases.iter().any(|c| &c.name == *n))
        {
            return Err(ConfigError::UnknownName {
                kind: "benchmark",
                name: unknown.clone(),
            });
        }
        Ok(Self {
            cases: self
                .cases
                .iter()
                .filter(|c| names.contains(&c.name))
                .cloned()
                .collect(),
        })
    }

    /// Cases in suite order
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkCase> {
        self.cases.iter()
    }

    /// Case names in suite order
    pub fn names(&self) -> Vec<String> {
        self.cases.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if the suite has no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
