//! Subset construction algorithm for converting an ε-NFA to a DFA.

use indexmap::IndexMap;
use std::collections::VecDeque;

use crate::automaton::alphabet::ALPHABET_LEN;
use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::EpsilonNfa;
use crate::automaton::state::{StateId, StateSet};

/// Convert an epsilon-NFA into an equivalent DFA using the powerset
/// construction.
///
/// Breadth-first over epsilon-closed subsets of NFA states, starting from
/// the closure of the entry state. Each subset is identified by its sorted
/// state vector, so two reachable subsets with the same members always
/// collapse onto one DFA state. A DFA state accepts iff its subset contains
/// the NFA accept state; a byte with no successors leaves the transition
/// undefined.
pub fn subset_construction(nfa: &EpsilonNfa) -> Dfa {
    let accept = nfa.accept_state();
    let mut dfa = Dfa::new();
    let mut subset_ids: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut queue: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let initial = nfa.epsilon_closure(&StateSet::singleton(0, nfa.num_states()));
    let initial_id = dfa.add_state(initial.contains(accept));
    subset_ids.insert(initial.to_vec(), initial_id);
    queue.push_back((initial, initial_id));

    while let Some((subset, source)) = queue.pop_front() {
        for byte in 0..ALPHABET_LEN {
            let next = nfa.move_on_byte(&subset, byte as u8);
            if next.is_empty() {
                continue;
            }

            let key = next.to_vec();
            let target = if let Some(&existing) = subset_ids.get(&key) {
                existing
            } else {
                let id = dfa.add_state(next.contains(accept));
                subset_ids.insert(key, id);
                queue.push_back((next, id));
                id
            };

            dfa.add_transition(source, byte as u8, target);
        }
    }

    dfa
}
