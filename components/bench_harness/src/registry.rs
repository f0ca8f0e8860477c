//! Runtime registry
//!
//! Immutable, ordered set of runtimes. Declaration order is the column
//! order of the result matrix and the tie-break order when ranking.

use core_types::{ConfigError, RuntimeSpec};
use std::collections::HashSet;

/// Ordered collection of uniquely named runtimes
#[derive(Debug, Clone)]
pub struct Registry {
    runtimes: Vec<RuntimeSpec>,
}

impl Registry {
    /// Build a registry, validating names and invocations
    ///
    /// Whether each executable actually exists is not checked here; a
    /// missing interpreter surfaces as `RuntimeUnavailable` per pair.
    pub fn new(runtimes: Vec<RuntimeSpec>) -> Result<Self, ConfigError> {
        if runtimes.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for spec in &runtimes {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::EmptyName("runtime"));
            }
            if spec.program().map_or(true, |p| p.is_empty()) {
                return Err(ConfigError::EmptyInvocation(spec.name.clone()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateRuntime(spec.name.clone()));
            }
        }

        Ok(Self { runtimes })
    }

    /// Look up a runtime by display name
    pub fn get(&self, name: &str) -> Option<&RuntimeSpec> {
        self.runtimes.iter().find(|r| r.name == name)
    }

    /// Runtimes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &RuntimeSpec> {
        self.runtimes.iter()
    }

    /// Runtime names in declaration order
    pub fn names(&self) -> Vec<String> {
        self.runtimes.iter().map(|r| r.name.clone()).collect()
    }

    /// Distinct file suffixes, in first-seen order
    pub fn suffixes(&self) -> Vec<&str> {
        let mut suffixes: Vec<&str> = Vec::new();
        for spec in &self.runtimes {
            if !suffixes.contains(&spec.file_suffix.as_str()) {
                suffixes.push(&spec.file_suffix);
            }
        }
        suffixes
    }

    /// Keep only the named runtimes, preserving declaration order
    pub fn retain(&self, names: &[String]) -> Result<Self, ConfigError> {
        for name in names {
            if self.get(name).is_none() {
                return Err(ConfigError::UnknownName {
                    kind: "runtime",
                    name: name.clone(),
                });
            }
        }
        let runtimes = self
            .runtimes
            .iter()
            .filter(|r| names.contains(&r.name))
            .cloned()
            .collect();
        Self::new(runtimes)
    }

    /// Number of runtimes
    pub fn len(&self) -> usize {
        self.runtimes.len()
    }

    /// Always false for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.runtimes.is_empty()
    }
}
