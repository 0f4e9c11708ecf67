//! Pattern compilation errors.

use thiserror::Error;

/// Errors produced while compiling a pattern.
///
/// Every failure is detected at compile time; matching a line against a
/// compiled automaton cannot fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// An unmatched `(` or `)`.
    #[error("mismatched parentheses")]
    UnbalancedParentheses,

    /// `()` enclosing no sub-expression.
    #[error("empty group")]
    EmptyGroup,

    /// `*` or `+` with no operand to repeat.
    #[error("repetition operator with nothing to repeat")]
    DanglingRepetition,

    /// `|` with a missing left or right operand.
    #[error("alternation with a missing operand")]
    DanglingAlternation,

    /// The rewrite passes did not converge to a single expression.
    #[error("pattern did not reduce to a single expression")]
    AmbiguousResult,
}
