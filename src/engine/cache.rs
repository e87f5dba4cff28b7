//! Memoized filter results keyed by filter state.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::filter;
use crate::models::{FilterState, UserRecord};

/// Bounded map from [`FilterState`] to matching source positions.
///
/// The record source never changes, so entries never go stale; the oldest
/// entry is evicted once `capacity` is reached.
#[derive(Debug)]
pub struct FilterCache {
    capacity: usize,
    entries: HashMap<FilterState, Arc<[usize]>>,
    order: VecDeque<FilterState>,
    hits: u64,
    misses: u64,
}

impl FilterCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Indices of `records` matching `filter`, computed at most once per key.
    pub fn matching(&mut self, records: &[UserRecord], filter: &FilterState) -> Arc<[usize]> {
        if let Some(hit) = self.entries.get(filter) {
            self.hits += 1;
            return Arc::clone(hit);
        }

        self.misses += 1;
        let computed: Arc<[usize]> = filter::matching_indices(records, filter).into();
        if self.capacity == 0 {
            return computed;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(filter.clone());
        self.entries.insert(filter.clone(), Arc::clone(&computed));
        tracing::trace!(
            entries = self.len(),
            hits = self.hits,
            misses = self.misses,
            "Cached filter result"
        );

        computed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
