//! The password puzzle: ground truth plus the attempt budget

use super::{Evaluation, Oracle, PuzzleError, PuzzleState};
use crate::core::{ALPHABET_SIZE, Feedback, Mark, PASSWORD_LENGTH, Sequence, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of guesses a puzzle allows
pub const MAX_ATTEMPTS: u8 = 5;

/// A hidden password and the rules for guessing it
///
/// The puzzle owns its own PRNG, so independent puzzles never share state.
#[derive(Debug, Clone)]
pub struct Puzzle {
    rng: StdRng,
    secret: Option<Sequence>,
    attempt_budget: u8,
    remaining_attempts: u8,
    state: PuzzleState,
}

impl Puzzle {
    /// Create an uninitialized puzzle seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an uninitialized puzzle with a reproducible PRNG
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            secret: None,
            attempt_budget: MAX_ATTEMPTS,
            remaining_attempts: MAX_ATTEMPTS,
            state: PuzzleState::Uninitialized,
        }
    }

    /// Override the number of guesses allowed per secret
    ///
    /// Takes effect at the next `generate` or `set`.
    #[must_use]
    pub fn with_attempt_budget(mut self, budget: u8) -> Self {
        self.attempt_budget = budget;
        self.remaining_attempts = budget;
        self
    }

    /// Draw a fresh random secret and make the puzzle Ready
    ///
    /// Symbols are independent and uniform, so repeats are allowed.
    pub fn generate(&mut self) -> &Sequence {
        let mut symbols = [Symbol::RedStar; PASSWORD_LENGTH];
        for slot in &mut symbols {
            *slot = Symbol::ALL[self.rng.random_range(0..ALPHABET_SIZE)];
        }

        self.reset(Sequence::new(symbols))
    }

    /// Adopt an externally supplied secret and make the puzzle Ready
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLength` unless exactly four symbols are
    /// given; the puzzle is left untouched in that case.
    pub fn set(&mut self, symbols: &[Symbol]) -> Result<(), PuzzleError> {
        let secret = Sequence::from_slice(symbols).map_err(|_| PuzzleError::InvalidLength {
            expected: PASSWORD_LENGTH,
            actual: symbols.len(),
        })?;
        self.reset(secret);
        Ok(())
    }

    fn reset(&mut self, secret: Sequence) -> &Sequence {
        self.remaining_attempts = self.attempt_budget;
        self.state = PuzzleState::Ready;
        self.secret.insert(secret)
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn status(&self) -> PuzzleState {
        self.state
    }

    /// Guesses left before the puzzle is lost
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    /// The hidden secret, for drivers that report on it
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Option<&Sequence> {
        self.secret.as_ref()
    }

    /// Evaluate a guess against the secret
    ///
    /// On success one attempt is consumed and the state moves to Won (all
    /// four positions right), Lost (no attempts left) or InProgress.
    ///
    /// # Errors
    /// Returns a `PuzzleError` without touching the puzzle when it is not
    /// Ready/InProgress, has no attempts left, or the guess does not have
    /// four symbols.
    pub fn evaluate(&mut self, guess: &[Symbol]) -> Result<Evaluation, PuzzleError> {
        if !self.state.accepts_guesses() {
            return Err(PuzzleError::NotPlayable(self.state));
        }
        if self.remaining_attempts < 1 {
            return Err(PuzzleError::AttemptsExhausted);
        }
        let secret = self.secret.ok_or(PuzzleError::NotPlayable(self.state))?;
        let guess = Sequence::from_slice(guess).map_err(|_| PuzzleError::InvalidLength {
            expected: PASSWORD_LENGTH,
            actual: guess.len(),
        })?;

        let feedback = Feedback::calculate(&guess, &secret);
        self.remaining_attempts -= 1;
        self.state = if feedback.count(Mark::Right) == PASSWORD_LENGTH {
            PuzzleState::Won
        } else if self.remaining_attempts == 0 {
            PuzzleState::Lost
        } else {
            PuzzleState::InProgress
        };

        Ok(Evaluation {
            state: self.state,
            feedback,
        })
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle for Puzzle {
    fn status(&self) -> PuzzleState {
        Self::status(self)
    }

    fn evaluate(&mut self, guess: &[Symbol]) -> Result<Evaluation, PuzzleError> {
        Self::evaluate(self, guess)
    }
}
