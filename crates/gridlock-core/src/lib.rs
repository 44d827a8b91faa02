//! Core data structures for a 9x9 Sudoku board.
//!
//! This crate provides the board model used by the solver: type-safe digits,
//! board positions, candidate sets, and the [`Board`] itself with parsing,
//! validity checking, candidate computation, and rendering.
//!
//! # Overview
//!
//! The crate is organized around four types:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Board position (x, y) coordinates with row-major indexing
//! - [`digit_set`]: A compact set of digits 1-9, used for candidates
//! - [`board`]: The 9x9 grid of optional digits, with construction from
//!   text or a file, row/column/block validity checks, first-empty lookup,
//!   candidate computation, and a fixed-format textual rendering
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Digit, Position};
//!
//! let mut board = Board::empty();
//! board[Position::new(4, 4)] = Some(Digit::D5);
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the center block
//! let candidates = board.candidates(Position::new(4, 5));
//! assert!(!candidates.contains(Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, FormatError, LoadError, group_is_valid},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
