//! State types for automata.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A state identifier represented as a u32.
pub type StateId = u32;

/// A set of NFA states implemented using a fixed-size bit set.
///
/// Subset construction identifies every DFA state by the set of NFA states
/// it stands for; [`StateSet::to_vec`] provides the canonical sorted form
/// used as the map key.
#[derive(Clone, PartialEq, Eq)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Create a state set containing a single state.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Insert a state into the set.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        idx < self.bits.len() && self.bits.contains(idx)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Canonical sorted contents. Two sets with the same members always
    /// produce the same vector, regardless of their capacities.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_set_basic() {
        let mut set = StateSet::with_capacity(10);
        assert!(set.is_empty());

        set.insert(3);
        set.insert(7);
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_state_set_singleton() {
        let set = StateSet::singleton(5, 10);
        assert_eq!(set.len(), 1);
        assert!(set.contains(5));
    }

    #[test]
    fn test_state_set_grows_past_capacity() {
        let mut set = StateSet::with_capacity(2);
        set.insert(40);
        assert!(set.contains(40));
        assert!(!set.contains(41));
    }

    #[test]
    fn test_canonical_vec_ignores_capacity() {
        let mut small = StateSet::with_capacity(4);
        let mut large = StateSet::with_capacity(64);
        for state in [2, 0, 3] {
            small.insert(state);
            large.insert(state);
        }
        assert_eq!(small.to_vec(), vec![0, 2, 3]);
        assert_eq!(small.to_vec(), large.to_vec());
    }
}
