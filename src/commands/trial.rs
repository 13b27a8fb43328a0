//! Running a single puzzle through the solver
//!
//! Shared by every batch mode.

use super::stats::BatchStatistics;
use crate::core::Sequence;
use crate::puzzle::Puzzle;
use crate::solver::{GuessStep, SolveError, Solver, SolverConfig, StepRecorder};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration shared by the batch modes
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// Keep every guess step so it can be printed
    pub verbose: bool,
    /// Draw a progress bar while running
    pub show_progress: bool,
    pub solver: SolverConfig,
}

impl BatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbose: false,
            show_progress: true,
            solver: SolverConfig::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a single trial ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialVerdict {
    /// The solver found the secret
    Solved { attempts: usize, sequence: Sequence },
    /// The puzzle ran out of attempts
    Failed { attempts: usize },
    /// The solve could not reach a verdict
    Invalid(SolveError),
}

/// Result from running one puzzle
#[derive(Debug, Clone)]
pub struct TrialRecord {
    pub secret: Option<Sequence>,
    pub verdict: TrialVerdict,
    /// Time spent inside the solver
    pub duration: Duration,
    /// Guess steps, recorded only in verbose runs
    pub steps: Vec<GuessStep>,
}

/// Trials of a batch together with their statistics
#[derive(Debug)]
pub struct BatchReport {
    pub statistics: BatchStatistics,
    pub records: Vec<TrialRecord>,
}

/// Solve a prepared puzzle and time the solver
pub fn run_trial(solver: &Solver, puzzle: &mut Puzzle, record_steps: bool) -> TrialRecord {
    let secret = puzzle.secret().copied();
    let mut recorder = StepRecorder::new();

    let start = Instant::now();
    let result = if record_steps {
        solver.solve_observed(puzzle, &mut recorder)
    } else {
        solver.solve(puzzle)
    };
    let duration = start.elapsed();

    let verdict = match result {
        Ok(outcome) => match outcome.sequence {
            Some(sequence) => TrialVerdict::Solved {
                attempts: outcome.attempts,
                sequence,
            },
            None => TrialVerdict::Failed {
                attempts: outcome.attempts,
            },
        },
        Err(err) => {
            log::warn!("solve failed for {secret:?}: {err}");
            TrialVerdict::Invalid(err)
        }
    };

    TrialRecord {
        secret,
        verdict,
        duration,
        steps: recorder.into_steps(),
    }
}

/// Progress bar for a batch, hidden when disabled
pub(crate) fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}
