//! Password deduction
//!
//! Two-phase solver: partition probes followed by a constrained search over
//! per-position candidates.

mod candidates;
mod engine;
mod error;
mod observer;

pub use candidates::{CandidateSet, Contradiction};
pub use engine::{FIRST_PROBE, Outcome, SECOND_PROBE, Solver, SolverConfig};
pub use error::SolveError;
pub use observer::{GuessStep, Phase, SolveObserver, StepRecorder};
