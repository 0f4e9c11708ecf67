//! The byte alphabet automata run over.

use crate::automaton::state::StateId;

/// Number of distinct byte values. Patterns and input lines are plain byte
/// sequences; there is no alphabet beyond 0–255.
pub const ALPHABET_LEN: usize = 256;

/// One state's byte transitions: at most one successor per byte value.
/// `None` means the automaton has no move for that byte.
pub type ByteRow = [Option<StateId>; ALPHABET_LEN];
