//! Backtracking solver for 9x9 Sudoku boards.
//!
//! This crate completes a partially filled [`Board`] by depth-first search
//! with constraint-based pruning, or reports that no completion exists.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Board;
//! use gridlock_solver::BacktrackingSolver;
//!
//! let mut board: Board = "\
//! 530070000\n\
//! 600195000\n\
//! 098000060\n\
//! 800060003\n\
//! 400803001\n\
//! 700020006\n\
//! 060000280\n\
//! 000419005\n\
//! 000080079"
//!     .parse()?;
//!
//! let solver = BacktrackingSolver::new();
//! assert!(solver.solve(&mut board));
//! assert!(board.is_full() && board.is_valid());
//! # Ok::<(), gridlock_core::FormatError>(())
//! ```
//!
//! [`Board`]: gridlock_core::Board

pub mod backtracking;

// Re-export commonly used types
pub use self::backtracking::{BacktrackingSolver, Revalidation, SolveStats};
