//! Puzzle lifecycle states and evaluation results

use crate::core::Feedback;
use std::fmt;

/// Where a puzzle is in its guess/attempt lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PuzzleState {
    /// No secret has been generated or set
    #[default]
    Uninitialized,
    /// A secret is in place and no guess has been evaluated yet
    Ready,
    /// At least one guess was evaluated and attempts remain
    InProgress,
    /// The last guess matched every position
    Won,
    /// Attempts ran out without a winning guess
    Lost,
}

impl PuzzleState {
    /// Check whether a guess may be evaluated in this state
    #[inline]
    #[must_use]
    pub const fn accepts_guesses(self) -> bool {
        matches!(self, Self::Ready | Self::InProgress)
    }

    /// Check whether this state ends the puzzle
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uninitialized => "uninitialized",
            Self::Ready => "ready",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Result of a successfully evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Puzzle state after the guess
    pub state: PuzzleState,
    /// Per-position feedback for the guess
    pub feedback: Feedback,
}
