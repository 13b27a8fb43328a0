//! Specified-secret solving command
//!
//! Solves secrets given on the command line.

use super::stats::{BatchMode, BatchStatistics};
use super::trial::{BatchConfig, BatchReport, progress_bar, run_trial};
use crate::core::{PASSWORD_LENGTH, Sequence, SequenceError, Symbol, is_separator};
use crate::puzzle::Puzzle;
use crate::solver::Solver;

/// Split command-line tokens into secrets
///
/// Digits are read across all tokens and grouped in fours, so `0 1 2 3`,
/// `0123` and `01 23,4567` all work.
///
/// # Errors
/// Returns `SequenceError::InvalidSymbol` for any character that is neither
/// a digit 0-7 nor a separator, and `SequenceError::InvalidLength` with the
/// size of a trailing incomplete group.
///
/// # Examples
/// ```
/// use password_solver::commands::parse_secrets;
///
/// let secrets = parse_secrets(["01", "23", "4546"]).unwrap();
/// assert_eq!(secrets.len(), 2);
/// assert_eq!(secrets[1].to_string(), "{ 4, 5, 4, 6 }");
/// ```
pub fn parse_secrets<I, S>(tokens: I) -> Result<Vec<Sequence>, SequenceError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut digits: Vec<Symbol> = Vec::new();
    for token in tokens {
        for ch in token.as_ref().chars().filter(|&ch| !is_separator(ch)) {
            digits.push(Symbol::from_digit(ch).ok_or(SequenceError::InvalidSymbol(ch))?);
        }
    }

    let groups = digits.chunks_exact(PASSWORD_LENGTH);
    if !groups.remainder().is_empty() {
        return Err(SequenceError::InvalidLength(groups.remainder().len()));
    }

    groups.map(Sequence::from_slice).collect()
}

/// Solve each given secret once, in order
pub fn run_specified(secrets: &[Sequence], puzzle: &mut Puzzle, config: &BatchConfig) -> BatchReport {
    log::info!("solving {} specified secrets", secrets.len());

    let solver = Solver::new(config.solver);
    let pb = progress_bar(secrets.len(), config.show_progress && secrets.len() > 1);
    let mut records = Vec::with_capacity(secrets.len());

    for secret in secrets {
        if let Err(err) = puzzle.set(secret.as_ref()) {
            log::error!("cannot set {secret}: {err}");
        }
        records.push(run_trial(&solver, puzzle, config.verbose));
        pb.inc(1);
    }
    pb.finish_and_clear();

    BatchReport {
        statistics: BatchStatistics::from_records(BatchMode::Specified, &records),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::trial::TrialVerdict;

    fn seq(text: &str) -> Sequence {
        text.parse().unwrap()
    }

    fn quiet() -> BatchConfig {
        BatchConfig {
            show_progress: false,
            ..BatchConfig::default()
        }
    }

    #[test]
    fn parse_groups_digits_across_tokens() {
        let secrets = parse_secrets(["0", "1", "2", "3", "45", "46"]).unwrap();
        assert_eq!(secrets, vec![seq("0123"), seq("4546")]);
    }

    #[test]
    fn parse_ignores_separators() {
        let secrets = parse_secrets(["1,0,3,2", "{7 7 7 7}"]).unwrap();
        assert_eq!(secrets, vec![seq("1032"), seq("7777")]);
    }

    #[test]
    fn parse_rejects_incomplete_group() {
        assert_eq!(
            parse_secrets(["0123", "45"]),
            Err(SequenceError::InvalidLength(2))
        );
    }

    #[test]
    fn parse_rejects_out_of_range_digit() {
        assert_eq!(
            parse_secrets(["0128"]),
            Err(SequenceError::InvalidSymbol('8'))
        );
    }

    #[test]
    fn parse_empty_input_yields_nothing() {
        assert_eq!(parse_secrets(Vec::<String>::new()), Ok(Vec::new()));
    }

    #[test]
    fn specified_secrets_are_solved_in_order() {
        let secrets = vec![seq("0123"), seq("1032"), seq("4546")];
        let mut puzzle = Puzzle::with_seed(1);
        let report = run_specified(&secrets, &mut puzzle, &quiet());

        let attempts: Vec<usize> = report
            .records
            .iter()
            .map(|r| match r.verdict {
                TrialVerdict::Solved { attempts, .. } => attempts,
                _ => panic!("unexpected verdict {:?}", r.verdict),
            })
            .collect();
        assert_eq!(attempts, vec![1, 2, 3]);
        assert_eq!(report.statistics.exit_code(), 0);
    }

    #[test]
    fn no_secrets_is_an_invalid_batch() {
        let report = run_specified(&[], &mut Puzzle::with_seed(1), &quiet());
        assert_eq!(report.statistics.total, 0);
        assert_eq!(report.statistics.exit_code(), 255);
    }
}
