//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Sequence};

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Right => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Incorrect => '⬜',
        })
        .collect()
}

/// Format a sequence with its symbols joined by `+`
#[must_use]
pub fn sequence_to_sum(sequence: &Sequence) -> String {
    sequence
        .symbols()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Name each symbol of a sequence, e.g. `blue puzzle, blue leaf, ...`
#[must_use]
pub fn sequence_to_names(sequence: &Sequence) -> String {
    sequence
        .symbols()
        .iter()
        .map(|symbol| symbol.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pick the singular or plural form of a noun
#[must_use]
pub const fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
