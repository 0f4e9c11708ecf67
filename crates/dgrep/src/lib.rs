//! Compile a regular expression into a minimized DFA and filter lines of
//! text through it.
//!
//! The pipeline runs strictly forward: pattern string → syntax tree →
//! epsilon-NFA → DFA → minimized DFA. Every intermediate artifact is built
//! once and consumed once; the minimized DFA is the only long-lived value,
//! and it is immutable, so lines can be matched from any number of threads
//! at once.
//!
//! Supported syntax: literal bytes, `.` (any byte), `*`, `+`, `|`, and
//! `( )` grouping with implicit concatenation. Patterns and lines are raw
//! byte sequences; there is no encoding awareness.

pub mod automaton;
pub mod matcher;
pub mod syntax;

mod error;

use log::debug;

pub use crate::automaton::Dfa;
pub use crate::error::PatternError;
pub use crate::matcher::line_contains_match;

/// Compile `pattern` into a minimized DFA.
///
/// All malformations are reported here as typed errors; matching against
/// the returned automaton cannot fail, and no partially compiled automaton
/// is ever returned.
pub fn compile(pattern: &[u8]) -> Result<Dfa, PatternError> {
    let tree = syntax::parse(pattern)?;
    let nfa = automaton::EpsilonNfa::from_syntax(&tree);
    debug!("lowered pattern into an epsilon-NFA with {} states", nfa.num_states());
    let dfa = automaton::subset_construction(&nfa);
    debug!("determinized into {} DFA states", dfa.num_states());
    let minimized = dfa.minimize();
    debug!(
        "minimization kept {} of {} DFA states",
        minimized.num_states(),
        dfa.num_states()
    );
    Ok(minimized)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the whole input through the DFA and report acceptance at the
    /// end, i.e. whether `input` itself is in the automaton's language.
    fn accepts(dfa: &Dfa, input: &[u8]) -> bool {
        let mut state = 0;
        for &byte in input {
            match dfa.transition(state, byte) {
                Some(next) => state = next,
                None => return false,
            }
        }
        dfa.is_accepting(state)
    }

    #[test]
    fn test_literal_pattern_accepts_exactly_itself() {
        let dfa = compile(b"abc").unwrap();
        assert!(accepts(&dfa, b"abc"));
        assert!(!accepts(&dfa, b""));
        assert!(!accepts(&dfa, b"ab"));
        assert!(!accepts(&dfa, b"abcd"));
        assert!(!accepts(&dfa, b"xbc"));
    }

    #[test]
    fn test_compile_rejects_malformed_patterns() {
        assert_eq!(compile(b"(").unwrap_err(), PatternError::UnbalancedParentheses);
        assert_eq!(compile(b")").unwrap_err(), PatternError::UnbalancedParentheses);
        assert_eq!(compile(b"()").unwrap_err(), PatternError::EmptyGroup);
        assert_eq!(compile(b"*abc").unwrap_err(), PatternError::DanglingRepetition);
        assert_eq!(compile(b"|abc").unwrap_err(), PatternError::DanglingAlternation);
        assert_eq!(compile(b"abc|").unwrap_err(), PatternError::DanglingAlternation);
        assert_eq!(compile(b"").unwrap_err(), PatternError::AmbiguousResult);
    }

    #[test]
    fn test_compiled_dfa_starts_at_state_zero() {
        // The accepting block is numbered first during refinement, so a
        // missing swap would leave the start state of `ab` elsewhere.
        let dfa = compile(b"ab").unwrap();
        assert!(!dfa.is_accepting(0));
        assert!(dfa.transition(0, b'a').is_some());
    }

    #[test]
    fn test_minimization_collapses_redundant_alternation() {
        // a|a and a describe the same language, so both minimize to the
        // same two-state automaton.
        let plain = compile(b"a").unwrap();
        let redundant = compile(b"a|a").unwrap();
        assert_eq!(plain.num_states(), redundant.num_states());
        assert_eq!(plain.num_states(), 2);
    }

    #[test]
    fn test_compile_errors_format_as_diagnostics() {
        let error = compile(b"a(").unwrap_err();
        assert_eq!(error.to_string(), "mismatched parentheses");
    }
}
