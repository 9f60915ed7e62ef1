use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of input data. Age stays as raw text; numeric interpretation
/// happens only at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: String,
    pub country: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            country: country.into(),
        }
    }
}

/// Category label to count mapping. Iteration follows first-seen order so
/// reported lines stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        if !self.counts.contains_key(key) {
            self.order.push(key.to_string());
        }
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.counts[key]))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Rendered report, one entry per output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    pub lines: Vec<String>,
}
