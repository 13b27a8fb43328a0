//! Command implementations
//!
//! Batch drivers around the puzzle and solver. None of this is needed to
//! solve a single puzzle.

pub mod random;
pub mod solve;
pub mod stats;
pub mod traverse;
pub mod trial;

pub use random::{GroupCount, parse_group_count, run_random};
pub use solve::{parse_secrets, run_specified};
pub use stats::{BatchMode, BatchStatistics, EXIT_FAILURE, EXIT_INVALID, EXIT_SUCCESS};
pub use traverse::run_traversal;
pub use trial::{BatchConfig, BatchReport, TrialRecord, TrialVerdict, run_trial};
