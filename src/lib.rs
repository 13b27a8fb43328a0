//! Password Solver
//!
//! Deduces a hidden 4-symbol password over an 8-symbol alphabet within five
//! guesses, using Mastermind-style feedback (right, misplaced, incorrect).
//!
//! # Quick Start
//!
//! ```rust
//! use password_solver::puzzle::Puzzle;
//! use password_solver::solver::Solver;
//!
//! let mut puzzle = Puzzle::new();
//! puzzle.set("4546".parse::<password_solver::core::Sequence>().unwrap().as_ref()).unwrap();
//!
//! let outcome = Solver::default().solve(&mut puzzle).unwrap();
//! assert_eq!(outcome.attempts, 3);
//! assert_eq!(outcome.sequence.unwrap().to_string(), "{ 4, 5, 4, 6 }");
//! ```

// Core domain types
pub mod core;

// Ground truth and attempt lifecycle
pub mod puzzle;

// Deduction algorithm
pub mod solver;

// Batch drivers
pub mod commands;

// Terminal output formatting
pub mod output;
