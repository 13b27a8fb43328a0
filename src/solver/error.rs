//! Errors raised while solving

use super::candidates::Contradiction;
use crate::core::Sequence;
use crate::puzzle::{PuzzleError, PuzzleState};
use std::fmt;

/// Error type for a solve that could not reach a verdict
///
/// Running out of attempts is not an error; it is reported as an
/// [`Outcome`](super::Outcome) without a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The oracle was not Ready/InProgress when solving began
    NotSolvable(PuzzleState),
    /// The oracle refused a guess
    Rejected {
        attempt: usize,
        guess: Sequence,
        reason: PuzzleError,
    },
    /// Feedback struck a symbol that was not a candidate
    Contradiction {
        attempt: usize,
        detail: Contradiction,
    },
    /// No arrangement of the candidates uses the confirmed symbol count
    NoArrangement { attempts: usize, distinct: usize },
    /// The solver's own attempt ceiling was reached without a verdict
    AttemptLimit(usize),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSolvable(state) => write!(f, "Puzzle is {state} and cannot be solved"),
            Self::Rejected {
                attempt,
                guess,
                reason,
            } => write!(f, "Guess {attempt} {guess} was rejected: {reason}"),
            Self::Contradiction { attempt, detail } => {
                write!(f, "Feedback for guess {attempt} is inconsistent: {detail}")
            }
            Self::NoArrangement { attempts, distinct } => write!(
                f,
                "No arrangement with {distinct} distinct symbols remains after {attempts} guesses"
            ),
            Self::AttemptLimit(limit) => {
                write!(f, "Gave up after {limit} guesses without a verdict")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
