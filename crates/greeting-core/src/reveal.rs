//! Per-slide reveal-state tracking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What clicking an already revealed item does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Clicking a revealed item hides it again.
    #[default]
    Toggle,
    /// Revealed items stay revealed until the whole set is hidden.
    OneWay,
}

/// Which of a slide's `len` items have been revealed.
///
/// Keys are always within `0..len`; requests for other indices are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSet {
    len: usize,
    policy: RevealPolicy,
    revealed: BTreeSet<usize>,
}

impl RevealSet {
    /// Creates a set of `len` unrevealed items.
    pub fn new(len: usize, policy: RevealPolicy) -> Self {
        Self {
            len,
            policy,
            revealed: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// True iff every item is revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed.len() == self.len
    }

    /// Applies a click on `index`. Returns whether the set changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        if self.revealed.insert(index) {
            return true;
        }
        match self.policy {
            RevealPolicy::Toggle => self.revealed.remove(&index),
            RevealPolicy::OneWay => false,
        }
    }

    /// Marks `index` revealed. Returns whether it was hidden before.
    pub fn reveal(&mut self, index: usize) -> bool {
        index < self.len && self.revealed.insert(index)
    }

    pub fn reveal_all(&mut self) {
        self.revealed = (0..self.len).collect();
    }

    pub fn hide_all(&mut self) {
        self.revealed.clear();
    }

    /// Hides everything when complete, otherwise reveals everything.
    /// Returns whether the set is complete afterwards.
    pub fn toggle_all(&mut self) -> bool {
        if self.is_complete() {
            self.hide_all();
        } else {
            self.reveal_all();
        }
        self.is_complete()
    }

    /// Lowest hidden index, if any.
    pub fn next_hidden(&self) -> Option<usize> {
        (0..self.len).find(|i| !self.revealed.contains(i))
    }

    /// Revealed indices in ascending order.
    pub fn revealed(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_marks_only_that_item() {
        let mut set = RevealSet::new(6, RevealPolicy::Toggle);
        assert!(set.toggle(3));
        for i in 0..6 {
            assert_eq!(set.is_revealed(i), i == 3);
        }
    }

    #[test]
    fn test_toggle_policy_hides_again() {
        let mut set = RevealSet::new(3, RevealPolicy::Toggle);
        set.toggle(1);
        assert!(set.toggle(1));
        assert!(!set.is_revealed(1));
    }

    #[test]
    fn test_one_way_policy_keeps_revealed() {
        let mut set = RevealSet::new(3, RevealPolicy::OneWay);
        set.toggle(1);
        assert!(!set.toggle(1));
        assert!(set.is_revealed(1));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut set = RevealSet::new(4, RevealPolicy::Toggle);
        assert!(!set.toggle(4));
        assert!(!set.reveal(99));
        assert_eq!(set.revealed_count(), 0);
        assert!(set.revealed().all(|i| i < 4));
    }

    #[test]
    fn test_completion_scenario() {
        let mut set = RevealSet::new(6, RevealPolicy::OneWay);
        for i in [0, 2, 4] {
            set.toggle(i);
        }
        assert!(!set.is_complete());
        for i in [1, 3, 5] {
            set.toggle(i);
        }
        assert!(set.is_complete());
    }

    #[test]
    fn test_bulk_operations() {
        let mut set = RevealSet::new(32, RevealPolicy::OneWay);
        set.reveal_all();
        assert!(set.is_complete());
        assert_eq!(set.revealed_count(), 32);

        set.hide_all();
        assert!((0..32).all(|i| !set.is_revealed(i)));
    }

    #[test]
    fn test_toggle_all_flips_between_states() {
        let mut set = RevealSet::new(5, RevealPolicy::OneWay);
        set.toggle(2);
        assert!(set.toggle_all());
        assert!(!set.toggle_all());
        assert_eq!(set.revealed_count(), 0);
    }

    #[test]
    fn test_next_hidden_is_lowest() {
        let mut set = RevealSet::new(4, RevealPolicy::Toggle);
        set.reveal(0);
        set.reveal(2);
        assert_eq!(set.next_hidden(), Some(1));
        set.reveal_all();
        assert_eq!(set.next_hidden(), None);
    }
}
