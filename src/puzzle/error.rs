//! Errors raised by the puzzle

use super::PuzzleState;
use std::fmt;

/// Error type for rejected puzzle operations
///
/// A failed operation never changes the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// A secret or guess did not have exactly four symbols
    InvalidLength { expected: usize, actual: usize },
    /// A guess was submitted outside the Ready/InProgress states
    NotPlayable(PuzzleState),
    /// A guess was submitted with no attempts left
    AttemptsExhausted,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Expected {expected} symbols, got {actual}")
            }
            Self::NotPlayable(state) => write!(f, "Puzzle is {state} and cannot take guesses"),
            Self::AttemptsExhausted => write!(f, "No attempts remaining"),
        }
    }
}

impl std::error::Error for PuzzleError {}
