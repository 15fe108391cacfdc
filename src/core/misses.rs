//! Per-term miss counts.
//!
//! The tracker is keyed off the card store at the start of each quiz. Cards
//! added afterwards are not tracked until the next reset.

use std::collections::BTreeMap;

use super::cards::CardStore;

/// Term to miss-count mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissTracker {
    misses: BTreeMap<String, u32>,
}

impl MissTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked set with every term of `store`, all at zero.
    pub fn reset_for(&mut self, store: &CardStore) {
        self.misses = store.terms().into_iter().map(|t| (t.to_string(), 0)).collect();
        tracing::debug!(tracked = self.misses.len(), "miss tracker reset for store");
    }

    /// Record a wrong answer for `term`.
    ///
    /// An untracked term means the tracker was not reset before quizzing.
    /// The call is ignored.
    pub fn record_miss(&mut self, term: &str) {
        match self.misses.get_mut(term) {
            Some(count) => *count = count.saturating_add(1),
            None => tracing::warn!(term, "miss recorded for untracked term (ignored)"),
        }
    }

    /// Zero every count, keeping the tracked terms.
    pub fn reset_all(&mut self) {
        self.misses.values_mut().for_each(|count| *count = 0);
    }

    /// Miss count for `term`, if tracked.
    pub fn count(&self, term: &str) -> Option<u32> {
        self.misses.get(term).copied()
    }

    /// Iterate over `(term, count)` in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.misses.iter().map(|(t, c)| (t.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.misses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.misses.is_empty()
    }
}

impl<T: Into<String>> FromIterator<(T, u32)> for MissTracker {
    fn from_iter<I: IntoIterator<Item = (T, u32)>>(iter: I) -> Self {
        Self {
            misses: iter.into_iter().map(|(t, c)| (t.into(), c)).collect(),
        }
    }
}
