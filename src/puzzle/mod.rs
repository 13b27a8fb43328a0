//! The password puzzle
//!
//! Holds the secret, judges guesses, and enforces the attempt budget.

mod error;
mod game;
mod oracle;
mod state;

pub use error::PuzzleError;
pub use game::{MAX_ATTEMPTS, Puzzle};
pub use oracle::Oracle;
pub use state::{Evaluation, PuzzleState};
