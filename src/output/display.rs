//! Display functions for command results

use super::formatters::{
    create_progress_bar, feedback_to_emoji, plural, sequence_to_names, sequence_to_sum,
};
use crate::commands::{BatchMode, BatchReport, BatchStatistics, TrialRecord, TrialVerdict};
use crate::puzzle::PuzzleState;
use crate::solver::{GuessStep, Phase};
use colored::Colorize;

/// Print one guess step of a solve
pub fn print_step(step: &GuessStep) {
    let phase = match step.phase {
        Phase::Probe => "probe ",
        Phase::Search => "search",
    };
    let tail = match step.state {
        PuzzleState::Won => "Successful".green().bold().to_string(),
        PuzzleState::Lost => "Failed".red().bold().to_string(),
        _ => {
            let span = step.candidates.span();
            format!(
                "{} types, candidates {} ({span} {})",
                step.symbol_type_count,
                step.candidates,
                plural(span, "arrangement", "arrangements")
            )
        }
    };

    println!(
        "  {}: {} {} {} -> {}",
        step.attempt,
        phase.bright_black(),
        step.guess,
        feedback_to_emoji(&step.feedback),
        tail
    );
}

/// Print a trial's steps and its verdict
pub fn print_trial(record: &TrialRecord) {
    match record.secret {
        Some(secret) => println!("\n{} {}", "Secret:".cyan(), secret),
        None => println!("\n{}", "Secret: (not set)".cyan()),
    }

    for step in &record.steps {
        print_step(step);
    }

    let message = verdict_message(&record.verdict);
    match record.verdict {
        TrialVerdict::Solved { .. } => println!("{}", message.green()),
        TrialVerdict::Failed { .. } => println!("{}", message.red()),
        TrialVerdict::Invalid(_) => println!("{}", message.yellow()),
    }
}

/// One-line description of how a trial ended
fn verdict_message(verdict: &TrialVerdict) -> String {
    match verdict {
        TrialVerdict::Solved { attempts, sequence } => format!(
            "✅ The answer is {} ({}; {attempts} {}).",
            sequence_to_sum(sequence),
            sequence_to_names(sequence),
            plural(*attempts, "attempt", "attempts")
        ),
        TrialVerdict::Failed { attempts } => format!(
            "❌ Failed to solve in {attempts} {}.",
            plural(*attempts, "attempt", "attempts")
        ),
        TrialVerdict::Invalid(err) => format!("⚠️  The problem is invalid: {err}"),
    }
}

/// Announce the size of a random batch
pub fn print_group_count(count: usize) {
    println!("The group count has been set to {}.", count.to_string().bright_yellow());
}

/// Announce a traversal of every secret
pub fn print_traversal_notice() {
    println!("The program has entered the traversal mode.");
}

/// Print every trial of a verbose batch
pub fn print_trials(report: &BatchReport) {
    for record in &report.records {
        print_trial(record);
    }
}

/// Print batch statistics with formatting
pub fn print_batch_summary(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let invalid_verb = plural(stats.invalid, "was", "were");
    let groups = plural(stats.total, "group", "groups");
    let headline = match stats.mode {
        BatchMode::Random => format!("Conducted {} random {groups}", stats.total),
        BatchMode::Traversal => format!("Traversed {} {groups}", stats.total),
        BatchMode::Specified => format!("Conducted {} specified {groups}", stats.total),
    };
    println!(
        "\n{headline}, where {} succeeded, {} failed, and {} {invalid_verb} invalid.",
        stats.solved.to_string().green(),
        stats.failed.to_string().red(),
        stats.invalid.to_string().yellow()
    );

    if let (Some(avg_attempts), Some(avg_time)) = (stats.average_attempts(), stats.average_time()) {
        let micros = avg_time.as_secs_f64() * 1_000_000.0;
        println!("\n📊 {}", "Among the successful groups:".bright_cyan().bold());
        println!(
            "   Average attempts: {} / {} = {}",
            stats.total_attempts,
            stats.solved,
            format!("{avg_attempts:.6}").bright_yellow().bold()
        );
        println!(
            "   Average time:     {:.6} / {} = {micros:.6} {}",
            stats.solve_time.as_secs_f64() * 1_000_000.0,
            stats.solved,
            if micros > 1.0 {
                "microseconds"
            } else {
                "microsecond"
            }
        );

        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for attempts in 1..=stats.max_attempts() {
            let count = stats.distribution.get(&attempts).copied().unwrap_or(0);
            let pct = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
