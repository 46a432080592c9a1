use std::{collections::HashSet, hash::Hash};

use crate::foundation::core::Intersection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the element visible and stop observing it.
    Reveal,
    Ignore,
}

/// Bookkeeping for scroll-triggered reveals.
///
/// An element is revealed by the first report that has it intersecting; the
/// observer's own margin and threshold decide when that report is sent. After
/// that the element is forgotten, so later reports for it are ignored.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    observed: HashSet<K>,
    revealed: usize,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            observed: HashSet::new(),
            revealed: 0,
        }
    }

    /// Starts tracking `key`; returns `false` if it was already tracked.
    pub fn observe(&mut self, key: K) -> bool {
        self.observed.insert(key)
    }

    pub fn is_observing(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn on_intersection(&mut self, key: &K, hit: Intersection) -> RevealAction {
        if !hit.is_intersecting {
            return RevealAction::Ignore;
        }
        if !self.observed.remove(key) {
            return RevealAction::Ignore;
        }
        self.revealed += 1;
        RevealAction::Reveal
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/reveal.rs"]
mod tests;
