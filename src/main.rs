//! Password Solver - CLI
//!
//! Solves the Dreamland palace password lock: a random secret, a batch of
//! random secrets, every possible secret, or secrets given on the command
//! line.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use password_solver::{
    commands::{
        BatchConfig, BatchReport, EXIT_INVALID, GroupCount, parse_group_count, parse_secrets,
        run_random, run_specified, run_traversal,
    },
    output::{print_batch_summary, print_group_count, print_traversal_notice, print_trials},
    puzzle::Puzzle,
    solver::SolverConfig,
};
use std::io::{self, BufRead};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "password_solver",
    about = "Deduces the 4-symbol palace password (symbols 0-7) in at most five guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print every guess and each trial's answer
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for random secrets (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wait for the enter key before exiting
    #[arg(long, global = true)]
    pause: bool,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve random secrets (default: one)
    Random {
        /// Number of secrets; decimals round, 0x/0o/0b prefixes work,
        /// and 4096 or `inf` traverses every secret
        count: Option<String>,
    },

    /// Solve all 4096 possible secrets
    Traverse,

    /// Solve specific secrets, read four digits (0-7) at a time
    Solve {
        /// Symbols, e.g. `0 1 2 3` or `0123 4546`
        #[arg(required = true, num_args = 1..)]
        symbols: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let code = execute(&cli);
    if cli.pause {
        wait_for_enter(code)?;
    }

    Ok(ExitCode::from(code))
}

/// Run the selected mode, print its results and return the exit code
fn execute(cli: &Cli) -> u8 {
    let config = BatchConfig {
        verbose: cli.verbose,
        show_progress: !cli.no_progress,
        solver: SolverConfig::default(),
    };

    let report = match &cli.command {
        // Default to a single random secret if no command given
        None => run_count_command(GroupCount::Random(1), cli.seed, &config),
        Some(Commands::Random { count }) => {
            let count = count.as_deref().map_or(GroupCount::Random(1), parse_group_count);
            run_count_command(count, cli.seed, &config)
        }
        Some(Commands::Traverse) => {
            print_traversal_notice();
            run_traversal(&config)
        }
        Some(Commands::Solve { symbols }) => match parse_secrets(symbols) {
            Ok(secrets) => run_specified(&secrets, &mut Puzzle::new(), &config),
            Err(err) => {
                eprintln!("{} Invalid secret: {err}\n", "error:".red().bold());
                eprintln!("{}", Cli::command().render_usage());
                return EXIT_INVALID;
            }
        },
    };

    if config.verbose {
        print_trials(&report);
    }
    print_batch_summary(&report.statistics);

    report.statistics.exit_code()
}

fn run_count_command(count: GroupCount, seed: Option<u64>, config: &BatchConfig) -> BatchReport {
    match count {
        GroupCount::Random(n) => {
            print_group_count(n);
            let mut puzzle = seed.map_or_else(Puzzle::new, Puzzle::with_seed);
            run_random(n, &mut puzzle, config)
        }
        GroupCount::Traverse => {
            print_traversal_notice();
            run_traversal(config)
        }
    }
}

fn wait_for_enter(code: u8) -> Result<()> {
    println!("\nPlease press the enter key to exit ({code}).");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(())
}
