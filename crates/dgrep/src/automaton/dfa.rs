//! Deterministic Finite Automaton (DFA) with partition-refinement
//! minimization.

use indexmap::IndexMap;

use crate::automaton::alphabet::{ALPHABET_LEN, ByteRow};
use crate::automaton::state::StateId;

/// A deterministic finite automaton over bytes.
///
/// State 0 is the initial state, before and after minimization. A `None`
/// entry in a transition row means the automaton has no move for that
/// (state, byte) pair. The tables are never mutated once built, so a `Dfa`
/// can be shared freely across threads while matching.
#[derive(Debug, Clone)]
pub struct Dfa {
    moves: Vec<ByteRow>,
    accepting: Vec<bool>,
}

impl Dfa {
    pub(crate) fn new() -> Self {
        Self {
            moves: Vec::new(),
            accepting: Vec::new(),
        }
    }

    /// Append a state and return its id.
    pub(crate) fn add_state(&mut self, accepting: bool) -> StateId {
        self.moves.push([None; ALPHABET_LEN]);
        self.accepting.push(accepting);
        (self.moves.len() - 1) as StateId
    }

    pub(crate) fn add_transition(&mut self, source: StateId, byte: u8, destination: StateId) {
        self.moves[source as usize][byte as usize] = Some(destination);
    }

    /// Successor of `source` on `byte`, if any.
    pub fn transition(&self, source: StateId, byte: u8) -> Option<StateId> {
        self.moves[source as usize][byte as usize]
    }

    /// Whether `state` accepts.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state as usize]
    }

    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.moves.len()
    }

    /// Merge indistinguishable states by signature-based partition
    /// refinement.
    ///
    /// Starts from the accepting / non-accepting split and repeatedly
    /// splits blocks whose members disagree on the block their byte
    /// transitions land in, until a full pass splits nothing. The result
    /// is rebuilt from one representative per block, and the block holding
    /// the original state 0 is swapped back to index 0 so the initial
    /// state keeps its index.
    pub fn minimize(&self) -> Dfa {
        let num_states = self.num_states();
        if num_states == 0 {
            return Dfa::new();
        }

        let accepting: Vec<StateId> = (0..num_states as StateId)
            .filter(|&s| self.accepting[s as usize])
            .collect();
        let non_accepting: Vec<StateId> = (0..num_states as StateId)
            .filter(|&s| !self.accepting[s as usize])
            .collect();

        let mut blocks: Vec<Vec<StateId>> = Vec::new();
        if !accepting.is_empty() {
            blocks.push(accepting);
        }
        if !non_accepting.is_empty() {
            blocks.push(non_accepting);
        }

        loop {
            let block_of = Self::block_index(&blocks, num_states);
            let mut refined: Vec<Vec<StateId>> = Vec::new();
            let mut split = false;

            for block in &blocks {
                if block.len() <= 1 {
                    refined.push(block.clone());
                    continue;
                }
                // Signature: for every byte, the block the transition
                // currently lands in. Insertion order keeps the block
                // numbering deterministic.
                let mut groups: IndexMap<Vec<Option<usize>>, Vec<StateId>> = IndexMap::new();
                for &state in block {
                    let signature: Vec<Option<usize>> = self.moves[state as usize]
                        .iter()
                        .map(|target| target.map(|t| block_of[t as usize]))
                        .collect();
                    groups.entry(signature).or_default().push(state);
                }
                if groups.len() > 1 {
                    split = true;
                }
                refined.extend(groups.into_values());
            }

            blocks = refined;
            if !split {
                break;
            }
        }

        let block_of = Self::block_index(&blocks, num_states);
        let mut minimized = Dfa::new();
        for block in &blocks {
            minimized.add_state(self.accepting[block[0] as usize]);
        }
        // Transitions come from an arbitrary representative; all members
        // agree once refinement has stabilized.
        for (index, block) in blocks.iter().enumerate() {
            for (byte, target) in self.moves[block[0] as usize].iter().enumerate() {
                if let Some(target) = target {
                    minimized.moves[index][byte] = Some(block_of[*target as usize] as StateId);
                }
            }
        }

        let start_block = block_of[0] as StateId;
        if start_block != 0 {
            minimized.swap_states(0, start_block);
        }
        minimized
    }

    /// Swap two state rows and retarget every transition between them.
    fn swap_states(&mut self, a: StateId, b: StateId) {
        self.moves.swap(a as usize, b as usize);
        self.accepting.swap(a as usize, b as usize);
        for row in &mut self.moves {
            for entry in row.iter_mut() {
                if *entry == Some(a) {
                    *entry = Some(b);
                } else if *entry == Some(b) {
                    *entry = Some(a);
                }
            }
        }
    }

    /// Map each state to the index of the block containing it.
    fn block_index(blocks: &[Vec<StateId>], num_states: usize) -> Vec<usize> {
        let mut block_of = vec![0; num_states];
        for (index, block) in blocks.iter().enumerate() {
            for &state in block {
                block_of[state as usize] = index;
            }
        }
        block_of
    }
}
