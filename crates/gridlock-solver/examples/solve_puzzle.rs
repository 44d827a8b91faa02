//! Example demonstrating end-to-end puzzle solving.
//!
//! This example shows how to:
//! - Load a `Board` from a plain-text file (9 lines of 9 characters,
//!   `0` or `.` for an empty cell)
//! - Solve it with `BacktrackingSolver`
//! - Display the puzzle and its solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- puzzle.txt
//! ```
//!
//! Print search statistics:
//!
//! ```sh
//! cargo run --example solve_puzzle -- puzzle.txt --stats
//! ```
//!
//! Use the localized post-placement check instead of whole-board
//! re-validation:
//!
//! ```sh
//! cargo run --example solve_puzzle -- puzzle.txt --fast
//! ```

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use gridlock_core::Board;
use gridlock_solver::{BacktrackingSolver, Revalidation};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a puzzle file: 9 lines of 9 characters each.
    #[arg(value_name = "FILE")]
    puzzle: PathBuf,

    /// Print placement and backtrack counts after solving.
    #[arg(long)]
    stats: bool,

    /// Re-check only the affected row, column, and block per placement.
    #[arg(long)]
    fast: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut board = match Board::from_file(&args.puzzle) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}: {err}", args.puzzle.display());
            process::exit(2);
        }
    };

    println!("Puzzle:");
    println!("{board}");

    let revalidation = if args.fast {
        Revalidation::Affected
    } else {
        Revalidation::WholeBoard
    };
    let solver = BacktrackingSolver::with_revalidation(revalidation);

    let start = Instant::now();
    let (solved, stats) = solver.solve_with_stats(&mut board);
    let elapsed = start.elapsed();
    log::info!("search finished in {elapsed:?}");

    if !solved {
        eprintln!("No solution exists for this puzzle.");
        process::exit(1);
    }

    println!();
    println!("Solution:");
    println!("{board}");

    if args.stats {
        println!();
        println!("Placements: {}", stats.placements);
        println!("Backtracks: {}", stats.backtracks);
        println!("Elapsed: {elapsed:?}");
    }
}
