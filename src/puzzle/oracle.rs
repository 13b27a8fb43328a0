//! The solver's only window onto a hidden password

use super::{Evaluation, PuzzleError, PuzzleState};
use crate::core::Symbol;

/// Something that can judge guesses against a hidden secret
///
/// [`Puzzle`](super::Puzzle) is the real implementation; tests plug in
/// scripted oracles to exercise the solver's contradiction checks.
pub trait Oracle {
    /// Current lifecycle state
    fn status(&self) -> PuzzleState;

    /// Evaluate a guess, consuming one attempt on success
    ///
    /// # Errors
    /// Returns a `PuzzleError` when the guess is rejected; a rejected guess
    /// consumes nothing.
    fn evaluate(&mut self, guess: &[Symbol]) -> Result<Evaluation, PuzzleError>;
}
