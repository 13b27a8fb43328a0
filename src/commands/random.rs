//! Random batch command
//!
//! Solves freshly generated secrets and collects statistics.

use super::stats::{BatchMode, BatchStatistics};
use super::trial::{BatchConfig, BatchReport, progress_bar, run_trial};
use crate::core::SEQUENCE_COUNT;
use crate::puzzle::Puzzle;
use crate::solver::Solver;

/// How many secrets a batch should cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCount {
    /// This many randomly generated secrets (1-4095)
    Random(usize),
    /// Every possible secret
    Traverse,
}

/// Interpret a group count the forgiving way
///
/// - `inf` / `+inf` (any case) means every secret
/// - integers may carry a `0x`, `0o` or `0b` prefix
/// - anything with a `.` is read as a decimal and rounded half away from zero
/// - unparsable input counts as 1
///
/// The count is clamped to `1..=4096`; 4096 and above switch to traversal.
///
/// # Examples
/// ```
/// use password_solver::commands::{GroupCount, parse_group_count};
///
/// assert_eq!(parse_group_count("12"), GroupCount::Random(12));
/// assert_eq!(parse_group_count("2.5"), GroupCount::Random(3));
/// assert_eq!(parse_group_count("0x10"), GroupCount::Random(16));
/// assert_eq!(parse_group_count("inf"), GroupCount::Traverse);
/// assert_eq!(parse_group_count("junk"), GroupCount::Random(1));
/// ```
#[must_use]
pub fn parse_group_count(text: &str) -> GroupCount {
    let text = text.trim().to_lowercase();
    if text == "inf" || text == "+inf" {
        return GroupCount::Traverse;
    }

    let count = if text.contains('.') {
        text.parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .map_or(1, |x| x.round().clamp(1.0, SEQUENCE_COUNT as f64) as usize)
    } else {
        // Anything too large for usize is past the traversal threshold anyway
        parse_integer(&text).map_or(1, |x| {
            usize::try_from(x.max(1)).map_or(SEQUENCE_COUNT, |n| n.min(SEQUENCE_COUNT))
        })
    };

    if count >= SEQUENCE_COUNT {
        GroupCount::Traverse
    } else {
        GroupCount::Random(count)
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };

    let value = if let Some(hex) = digits.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(oct) = digits.strip_prefix("0o") {
        i64::from_str_radix(oct, 8)
    } else if let Some(bin) = digits.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)
    } else {
        digits.parse::<i64>()
    }
    .ok()?;

    Some(sign * value)
}

/// Solve `count` randomly generated secrets
///
/// The puzzle is regenerated before every trial, so a seeded puzzle makes
/// the whole batch reproducible.
pub fn run_random(count: usize, puzzle: &mut Puzzle, config: &BatchConfig) -> BatchReport {
    log::debug!("solving {count} random secrets");

    let solver = Solver::new(config.solver);
    let pb = progress_bar(count, config.show_progress);
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        puzzle.generate();
        records.push(run_trial(&solver, puzzle, config.verbose));
        pb.inc(1);
    }
    pb.finish_and_clear();

    BatchReport {
        statistics: BatchStatistics::from_records(BatchMode::Random, &records),
        records,
    }
}
