//! Step-by-step tracing of a solve
//!
//! Observers see every evaluated guess. Nothing is recorded unless one is
//! attached through [`Solver::solve_observed`](super::Solver::solve_observed).

use super::CandidateSet;
use crate::core::{Feedback, Sequence};
use crate::puzzle::PuzzleState;

/// Which phase of the deduction produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fixed partition probe over half of the alphabet
    Probe,
    /// Constrained search over the candidate set
    Search,
}

/// One evaluated guess and what the solver made of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    /// 1-based attempt number
    pub attempt: usize,
    pub phase: Phase,
    pub guess: Sequence,
    pub feedback: Feedback,
    /// Puzzle state after the guess
    pub state: PuzzleState,
    /// Candidates after merging the feedback (unchanged on a terminal state)
    pub candidates: CandidateSet,
    /// Distinct symbols confirmed present so far
    pub symbol_type_count: usize,
}

/// Receives every guess step of a solve
pub trait SolveObserver {
    fn on_guess(&mut self, step: &GuessStep);
}

impl<F: FnMut(&GuessStep)> SolveObserver for F {
    fn on_guess(&mut self, step: &GuessStep) {
        self(step);
    }
}

/// Keeps every step for later inspection
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    steps: Vec<GuessStep>,
}

impl StepRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps seen so far, in order
    #[must_use]
    pub fn steps(&self) -> &[GuessStep] {
        &self.steps
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<GuessStep> {
        self.steps
    }
}

impl SolveObserver for StepRecorder {
    fn on_guess(&mut self, step: &GuessStep) {
        self.steps.push(step.clone());
    }
}
