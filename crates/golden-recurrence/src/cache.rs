//! Optional memoization of recurrence results.
//!
//! Entries are keyed on the exact `(n, f0, f1)` triple (seed values by bit
//! pattern, so `0.0` and `-0.0` are distinct keys). An entry is written once
//! and never changes or expires, so readers on other threads can share one
//! cache behind its `RwLock`.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::trace;

use crate::error::Result;
use crate::recurrence::{checked_index, ratio_at, term_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Key {
    n: u64,
    f0: u64,
    f1: u64,
}

impl Key {
    fn new(n: u64, f0: f64, f1: f64) -> Self {
        Self {
            n,
            f0: f0.to_bits(),
            f1: f1.to_bits(),
        }
    }
}

/// Write-once, read-many cache in front of [`crate::term`] and
/// [`crate::convergence_ratio`].
#[derive(Debug, Default)]
pub struct TermCache {
    terms: RwLock<HashMap<Key, f64>>,
    ratios: RwLock<HashMap<Key, Result<f64>>>,
}

impl TermCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached [`crate::term`].
    pub fn term(&self, n: i64, f0: f64, f1: f64) -> Result<f64> {
        let key = Key::new(checked_index(n, 0)?, f0, f1);

        if let Some(&value) = read(&self.terms).get(&key) {
            trace!(n, f0, f1, "term cache hit");
            return Ok(value);
        }

        trace!(n, f0, f1, "term cache miss");
        let value = term_at(key.n, f0, f1);
        Ok(*write(&self.terms).entry(key).or_insert(value))
    }

    /// Cached [`crate::convergence_ratio`].
    ///
    /// Division-by-zero outcomes are cached like any other result.
    /// Invalid indices are rejected before the cache is consulted.
    pub fn convergence_ratio(&self, n: i64, f0: f64, f1: f64) -> Result<f64> {
        let key = Key::new(checked_index(n, 1)?, f0, f1);

        if let Some(result) = read(&self.ratios).get(&key) {
            trace!(n, f0, f1, "ratio cache hit");
            return result.clone();
        }

        trace!(n, f0, f1, "ratio cache miss");
        let result = ratio_at(key.n, f0, f1);
        write(&self.ratios).entry(key).or_insert(result).clone()
    }

    /// Number of cached terms and ratios.
    pub fn len(&self) -> usize {
        read(&self.terms).len() + read(&self.ratios).len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        write(&self.terms).clear();
        write(&self.ratios).clear();
    }
}

// Entries are plain values inserted in one step, so a map behind a poisoned
// lock is still consistent.
fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
