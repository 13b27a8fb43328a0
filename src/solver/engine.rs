//! Main password solver interface

use super::observer::{GuessStep, Phase, SolveObserver};
use super::{CandidateSet, SolveError};
use crate::core::{PASSWORD_LENGTH, Sequence, Symbol};
use crate::puzzle::{Evaluation, MAX_ATTEMPTS, Oracle, PuzzleState};

/// Probe over the first half of the alphabet
pub const FIRST_PROBE: Sequence = Sequence::new([
    Symbol::RedStar,
    Symbol::RedHeart,
    Symbol::RedPawprint,
    Symbol::RedBlossom,
]);

/// Probe over the second half of the alphabet
pub const SECOND_PROBE: Sequence = Sequence::new([
    Symbol::BluePuzzle,
    Symbol::BlueLeaf,
    Symbol::BlueCrescent,
    Symbol::BlueNote,
]);

/// Solver tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guesses the solver will submit before giving up on its own.
    /// Must not be smaller than the puzzle's budget.
    pub max_attempts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: usize::from(MAX_ATTEMPTS),
        }
    }
}

/// Result of a solve that reached a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Guesses submitted
    pub attempts: usize,
    /// The discovered secret, or `None` when the puzzle was lost
    pub sequence: Option<Sequence>,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.sequence.is_some()
    }
}

/// Main password solver
///
/// Deduces the secret in two phases:
/// 1. Partition probing: guess `0123`, and `4567` unless the first probe
///    already accounts for four distinct symbols
/// 2. Constrained search: repeatedly guess the first arrangement of the
///    candidates that uses exactly the confirmed number of distinct symbols
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

/// Mutable state of one solve
struct Run<'o, 's, O: ?Sized> {
    oracle: &'o mut O,
    observer: Option<&'s mut dyn SolveObserver>,
    candidates: CandidateSet,
    symbol_type_count: usize,
    attempts: usize,
}

impl Solver {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve the oracle's secret
    ///
    /// # Errors
    /// Returns a `SolveError` when the oracle is not Ready/InProgress on
    /// entry, rejects a guess, or gives feedback the candidates cannot
    /// accommodate. Losing the puzzle is an `Ok` outcome without a sequence.
    pub fn solve<O: Oracle + ?Sized>(&self, oracle: &mut O) -> Result<Outcome, SolveError> {
        self.run(oracle, None)
    }

    /// Solve the oracle's secret, reporting every guess to `observer`
    ///
    /// # Errors
    /// Same as [`Solver::solve`].
    pub fn solve_observed<O: Oracle + ?Sized>(
        &self,
        oracle: &mut O,
        observer: &mut dyn SolveObserver,
    ) -> Result<Outcome, SolveError> {
        self.run(oracle, Some(observer))
    }

    fn run<O: Oracle + ?Sized>(
        &self,
        oracle: &mut O,
        observer: Option<&mut dyn SolveObserver>,
    ) -> Result<Outcome, SolveError> {
        let state = oracle.status();
        if !state.accepts_guesses() {
            return Err(SolveError::NotSolvable(state));
        }

        let mut run = Run {
            oracle,
            observer,
            candidates: CandidateSet::new(),
            symbol_type_count: 0,
            attempts: 0,
        };

        // Phase A: partition probing
        if let Some(outcome) = run.probe(FIRST_PROBE)? {
            return Ok(outcome);
        }
        if run.symbol_type_count < PASSWORD_LENGTH {
            if let Some(outcome) = run.probe(SECOND_PROBE)? {
                return Ok(outcome);
            }
        } else {
            log::debug!("first probe is a permutation, skipping second probe");
        }

        // Phase B: constrained search
        while run.attempts < self.config.max_attempts {
            let guess = run
                .candidates
                .first_arrangement(run.symbol_type_count)
                .ok_or(SolveError::NoArrangement {
                    attempts: run.attempts,
                    distinct: run.symbol_type_count,
                })?;
            if let Some(outcome) = run.search(guess)? {
                return Ok(outcome);
            }
        }

        Err(SolveError::AttemptLimit(run.attempts))
    }
}

impl<O: Oracle + ?Sized> Run<'_, '_, O> {
    fn submit(&mut self, guess: Sequence) -> Result<Evaluation, SolveError> {
        let evaluation = self
            .oracle
            .evaluate(guess.as_ref())
            .map_err(|reason| SolveError::Rejected {
                attempt: self.attempts + 1,
                guess,
                reason,
            })?;
        self.attempts += 1;
        Ok(evaluation)
    }

    /// Submit a probe and merge its feedback
    fn probe(&mut self, guess: Sequence) -> Result<Option<Outcome>, SolveError> {
        let evaluation = self.submit(guess)?;
        if !evaluation.state.is_terminal() {
            self.symbol_type_count += self
                .candidates
                .absorb_probe(&guess, &evaluation.feedback);
        }
        log::debug!(
            "probe {guess} -> {} ({} symbol types confirmed)",
            evaluation.feedback,
            self.symbol_type_count
        );
        self.report(Phase::Probe, guess, &evaluation);

        Ok(self.verdict(guess, evaluation.state))
    }

    /// Submit a search guess and narrow the candidates
    fn search(&mut self, guess: Sequence) -> Result<Option<Outcome>, SolveError> {
        let evaluation = self.submit(guess)?;
        if !evaluation.state.is_terminal() {
            self.candidates
                .refine(&guess, &evaluation.feedback)
                .map_err(|detail| SolveError::Contradiction {
                    attempt: self.attempts,
                    detail,
                })?;
        }
        log::debug!("search {guess} -> {}", evaluation.feedback);
        self.report(Phase::Search, guess, &evaluation);

        Ok(self.verdict(guess, evaluation.state))
    }

    fn report(&mut self, phase: Phase, guess: Sequence, evaluation: &Evaluation) {
        log::trace!("candidates after attempt {}: {}", self.attempts, self.candidates);

        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_guess(&GuessStep {
                attempt: self.attempts,
                phase,
                guess,
                feedback: evaluation.feedback,
                state: evaluation.state,
                candidates: self.candidates.clone(),
                symbol_type_count: self.symbol_type_count,
            });
        }
    }

    fn verdict(&self, guess: Sequence, state: PuzzleState) -> Option<Outcome> {
        match state {
            PuzzleState::Won => Some(Outcome {
                attempts: self.attempts,
                sequence: Some(guess),
            }),
            PuzzleState::Lost => Some(Outcome {
                attempts: self.attempts,
                sequence: None,
            }),
            _ => None,
        }
    }
}
