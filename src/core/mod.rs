//! Core domain types for the palace password
//!
//! Pure value types with no I/O: symbols, sequences and guess feedback.

mod feedback;
mod sequence;
mod symbol;

pub use feedback::{Feedback, Mark};
pub(crate) use sequence::{distinct_count, is_separator};
pub use sequence::{PASSWORD_LENGTH, SEQUENCE_COUNT, Sequence, SequenceError};
pub use symbol::{ALPHABET_SIZE, Symbol};
