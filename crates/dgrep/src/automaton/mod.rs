//! Finite automata for pattern matching.
//!
//! This module provides the automaton half of the compiler pipeline:
//! - Thompson-style epsilon-NFA lowering of syntax trees
//! - Subset construction (epsilon-NFA to DFA conversion)
//! - Signature-based DFA minimization

mod alphabet;
mod dfa;
mod nfa;
mod state;
mod subset_construction;

pub use alphabet::{ALPHABET_LEN, ByteRow};
pub use dfa::Dfa;
pub use nfa::EpsilonNfa;
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
