//! Traversal command - comprehensive solver evaluation
//!
//! Runs the solver against every one of the 4096 possible secrets.

use super::stats::{BatchMode, BatchStatistics};
use super::trial::{BatchConfig, BatchReport, TrialRecord, progress_bar, run_trial};
use crate::core::{SEQUENCE_COUNT, Sequence};
use crate::puzzle::Puzzle;
use crate::solver::Solver;
use rayon::prelude::*;

/// Solve every possible secret
///
/// Trials are independent, so they run in parallel; records come back in
/// traversal order regardless.
#[must_use]
pub fn run_traversal(config: &BatchConfig) -> BatchReport {
    log::debug!("traversing all {SEQUENCE_COUNT} secrets");

    let solver = Solver::new(config.solver);
    let pb = progress_bar(SEQUENCE_COUNT, config.show_progress);

    let secrets: Vec<(u64, Sequence)> = (0..).zip(Sequence::all()).collect();

    let records: Vec<TrialRecord> = secrets
        .into_par_iter()
        .map(|(seed, secret)| {
            // The PRNG is never drawn from in traversal
            let mut puzzle = Puzzle::with_seed(seed);
            if let Err(err) = puzzle.set(secret.as_ref()) {
                // The untouched puzzle is then reported as invalid
                log::error!("cannot set {secret}: {err}");
            }
            let record = run_trial(&solver, &mut puzzle, config.verbose);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();

    BatchReport {
        statistics: BatchStatistics::from_records(BatchMode::Traversal, &records),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::trial::TrialVerdict;

    #[test]
    fn traversal_covers_every_secret_without_errors() {
        let config = BatchConfig {
            show_progress: false,
            ..BatchConfig::default()
        };
        let report = run_traversal(&config);
        let stats = &report.statistics;

        assert_eq!(report.records.len(), SEQUENCE_COUNT);
        assert_eq!(stats.total, SEQUENCE_COUNT);
        assert_eq!(stats.invalid, 0);
        assert_eq!(stats.solved + stats.failed, SEQUENCE_COUNT);
        assert!(stats.max_attempts() <= 5);

        for (index, record) in report.records.iter().enumerate() {
            let secret = Sequence::from_index(index).unwrap();
            assert_eq!(record.secret, Some(secret));
            if let TrialVerdict::Solved { sequence, .. } = record.verdict {
                assert_eq!(sequence, secret);
            }
        }
    }

    #[test]
    fn traversal_attempt_distribution() {
        let config = BatchConfig {
            show_progress: false,
            ..BatchConfig::default()
        };
        let stats = run_traversal(&config).statistics;

        let counts: Vec<usize> = (1..=5)
            .map(|attempts| stats.distribution.get(&attempts).copied().unwrap_or(0))
            .collect();
        assert_eq!(counts, vec![1, 12, 1282, 2238, 563]);
        assert_eq!(stats.solved, SEQUENCE_COUNT);
        assert_eq!(stats.exit_code(), 0);
    }

    #[test]
    fn traversal_solves_known_secrets() {
        let config = BatchConfig {
            show_progress: false,
            ..BatchConfig::default()
        };
        let report = run_traversal(&config);

        let verdict_for = |text: &str| {
            let secret: Sequence = text.parse().unwrap();
            report
                .records
                .iter()
                .find(|r| r.secret == Some(secret))
                .map(|r| r.verdict.clone())
                .unwrap()
        };

        assert_eq!(
            verdict_for("0123"),
            TrialVerdict::Solved {
                attempts: 1,
                sequence: "0123".parse().unwrap()
            }
        );
        assert_eq!(
            verdict_for("4546"),
            TrialVerdict::Solved {
                attempts: 3,
                sequence: "4546".parse().unwrap()
            }
        );
    }
}
