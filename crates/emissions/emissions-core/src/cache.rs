//! Request-scoped memoization of baseline figures.

use std::collections::HashMap;

/// Identity of one baseline figure. Metric ids are sorted and deduplicated
/// so that equal selections share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaselineKey {
    pub organization_id: String,
    pub year: i32,
    pub metrics: Vec<String>,
}

impl BaselineKey {
    pub fn new<S: AsRef<str>>(
        organization_id: impl Into<String>,
        year: i32,
        metrics: &[S],
    ) -> Self {
        let mut metrics: Vec<String> = metrics.iter().map(|m| m.as_ref().to_string()).collect();
        metrics.sort();
        metrics.dedup();
        Self {
            organization_id: organization_id.into(),
            year,
            metrics,
        }
    }
}

/// Baseline cache owned by the caller.
///
/// Create one per request (or per organization) and pass it in. Entries are
/// keyed by organization, so one cache never serves another tenant's figure.
#[derive(Debug, Default)]
pub struct BaselineCache {
    entries: HashMap<BaselineKey, f64>,
    hits: usize,
    misses: usize,
}

impl BaselineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, or the result of `compute` which is then stored.
    pub fn get_or_compute<F>(&mut self, key: BaselineKey, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(value) = self.entries.get(&key) {
            self.hits += 1;
            return *value;
        }
        self.misses += 1;
        let value = compute();
        self.entries.insert(key, value);
        value
    }

    pub fn get(&self, key: &BaselineKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
