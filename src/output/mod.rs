//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_summary, print_group_count, print_step, print_traversal_notice, print_trial,
    print_trials,
};
