//! Batch statistics
//!
//! Averages are taken over successful trials only.

use super::trial::{TrialRecord, TrialVerdict};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Exit code when no trial ran or any trial was invalid
pub const EXIT_INVALID: u8 = 255;
/// Exit code when some trials failed
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when every trial was solved
pub const EXIT_SUCCESS: u8 = 0;

/// Which batch produced the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Randomly generated secrets
    Random,
    /// Every possible secret
    Traversal,
    /// Secrets given on the command line
    Specified,
}

/// Statistics from a batch of trials
#[derive(Debug, Clone)]
pub struct BatchStatistics {
    pub mode: BatchMode,
    pub total: usize,
    pub solved: usize,
    pub failed: usize,
    pub invalid: usize,
    /// Attempts summed over solved trials
    pub total_attempts: usize,
    /// Solver time summed over solved trials
    pub solve_time: Duration,
    /// Attempts needed -> number of solved trials
    pub distribution: FxHashMap<usize, usize>,
}

impl BatchStatistics {
    #[must_use]
    pub fn new(mode: BatchMode) -> Self {
        Self {
            mode,
            total: 0,
            solved: 0,
            failed: 0,
            invalid: 0,
            total_attempts: 0,
            solve_time: Duration::ZERO,
            distribution: FxHashMap::default(),
        }
    }

    /// Tally a batch of trial records
    #[must_use]
    pub fn from_records(mode: BatchMode, records: &[TrialRecord]) -> Self {
        let mut stats = Self::new(mode);
        for record in records {
            stats.record(record);
        }
        stats
    }

    /// Tally one trial
    pub fn record(&mut self, record: &TrialRecord) {
        self.total += 1;
        match record.verdict {
            TrialVerdict::Solved { attempts, .. } => {
                self.solved += 1;
                self.total_attempts += attempts;
                self.solve_time += record.duration;
                *self.distribution.entry(attempts).or_insert(0) += 1;
            }
            TrialVerdict::Failed { .. } => self.failed += 1,
            TrialVerdict::Invalid(_) => self.invalid += 1,
        }
    }

    /// Mean attempts over solved trials
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.solved > 0).then(|| self.total_attempts as f64 / self.solved as f64)
    }

    /// Mean solver time over solved trials
    #[must_use]
    pub fn average_time(&self) -> Option<Duration> {
        let solved = u32::try_from(self.solved).ok().filter(|&n| n > 0)?;
        Some(self.solve_time / solved)
    }

    /// Most attempts any solved trial needed
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.distribution.keys().copied().max().unwrap_or(0)
    }

    /// Process exit code for the batch
    ///
    /// Invalid trials, or an empty batch, outrank plain failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.total == 0 || self.invalid > 0 {
            EXIT_INVALID
        } else if self.solved == self.total {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}
