//! The 9x9 Sudoku board: parsing, validity checks, candidates, rendering.

use std::fmt::{self, Display};
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::str::FromStr;

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// The horizontal separator line used by the textual rendering.
const SEPARATOR: &str = "-------------";

/// Error for text that does not describe a 9x9 grid.
///
/// Construction never yields a partially parsed board: the first malformed
/// row or character aborts parsing with one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// The input did not contain exactly 9 rows.
    #[display("expected 9 rows, found {count}")]
    RowCount {
        /// Number of rows found in the input.
        count: usize,
    },
    /// A row did not contain exactly 9 characters.
    #[display("row {row} has length {len}, expected 9")]
    RowLength {
        /// Index (0-8) of the offending row.
        row: usize,
        /// Number of characters in the row.
        len: usize,
    },
    /// A character was outside the accepted alphabet
    /// (`'1'`-`'9'`, `'0'`, `'.'`).
    #[display("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter {
        /// Index (0-8) of the offending row.
        row: usize,
        /// Index (0-8) of the offending column.
        col: usize,
        /// The rejected character.
        ch: char,
    },
}

/// Error for loading a board from a file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read board file: {_0}")]
    Io(std::io::Error),
    /// The file content is not a 9x9 grid.
    #[display("{_0}")]
    Format(FormatError),
}

/// Checks that no digit appears more than once in a group of cells.
///
/// Empty cells are ignored entirely; any number of empties is allowed. This
/// is a pure function over any cell sequence and is used identically for
/// rows, columns, and 3x3 blocks. The check is invariant under permutation
/// of its input.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, group_is_valid};
///
/// assert!(group_is_valid([None, Some(Digit::D1), None, Some(Digit::D2)]));
/// assert!(!group_is_valid([Some(Digit::D1), None, Some(Digit::D1)]));
/// ```
pub fn group_is_valid(cells: impl IntoIterator<Item = Option<Digit>>) -> bool {
    let mut seen = DigitSet::new();
    for digit in cells.into_iter().flatten() {
        if !seen.insert(digit) {
            return false;
        }
    }
    true
}

/// A 9x9 Sudoku board.
///
/// Each of the 81 cells holds either a digit 1-9 or is empty. Cells are
/// stored in row-major order and are read and written by indexing with a
/// [`Position`]. The board is mutated in place during solving; it owns its
/// cell array outright and is never resized.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Digit, Position};
///
/// let mut board = Board::empty();
/// assert_eq!(board.filled_count(), 0);
///
/// board[Position::new(0, 0)] = Some(Digit::D5);
/// assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
/// assert!(board.is_valid());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([Option<Digit>; 81]);

impl Board {
    /// Creates a board with all cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; 81])
    }

    /// Builds a board from exactly 9 rows of exactly 9 characters each.
    ///
    /// Characters `'1'`-`'9'` are digits; `'0'` and `'.'` denote an empty
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the row count is not 9, a row's length is
    /// not 9, or a character is outside the accepted alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Board, Digit, Position};
    ///
    /// let rows = [
    ///     "530070000",
    ///     "600195000",
    ///     "098000060",
    ///     "800060003",
    ///     "400803001",
    ///     "700020006",
    ///     "060000280",
    ///     "000419005",
    ///     "000080079",
    /// ];
    /// let board = Board::from_lines(&rows)?;
    /// assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
    /// assert_eq!(board[Position::new(2, 0)], None);
    /// # Ok::<(), gridlock_core::FormatError>(())
    /// ```
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, FormatError> {
        if lines.len() != 9 {
            return Err(FormatError::RowCount { count: lines.len() });
        }
        let mut board = Self::empty();
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != 9 {
                return Err(FormatError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '0' | '.' => None,
                    '1'..='9' => Digit::from_char(ch),
                    _ => return Err(FormatError::InvalidCharacter { row, col, ch }),
                };
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new(col as u8, row as u8);
                board[pos] = cell;
            }
        }
        Ok(board)
    }

    /// Loads a board from a plain-text file of 9 lines of 9 characters.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Format`] if its content is not a 9x9 grid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        let board = content.parse()?;
        Ok(board)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns the cells of row `y` from left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    pub fn row(&self, y: u8) -> impl Iterator<Item = Option<Digit>> {
        (0..9).map(move |x| self[Position::new(x, y)])
    }

    /// Returns the cells of column `x` from top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    pub fn column(&self, x: u8) -> impl Iterator<Item = Option<Digit>> {
        (0..9).map(move |y| self[Position::new(x, y)])
    }

    /// Returns the cells of the 3x3 block with the given index (0-8, left to
    /// right, top to bottom), in row-major order within the block.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    pub fn block(&self, index: u8) -> impl Iterator<Item = Option<Digit>> {
        assert!(index < 9);
        let origin = Position::new(index % 3 * 3, index / 3 * 3);
        (0..9).map(move |i| self[Position::new(origin.x() + i % 3, origin.y() + i / 3)])
    }

    /// Checks whether the whole board satisfies the Sudoku constraints so
    /// far: no digit repeats within any of the 9 rows, 9 columns, or 9
    /// non-overlapping 3x3 blocks. Empty cells never violate a constraint.
    ///
    /// This scans all 27 groups on every call.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0..9).all(|i| {
            group_is_valid(self.row(i)) && group_is_valid(self.column(i)) && group_is_valid(self.block(i))
        })
    }

    /// Checks only the row, column, and 3x3 block containing `pos`.
    ///
    /// When a single cell has changed, this is equivalent to [`is_valid`]
    /// provided the rest of the board was valid beforehand, since all other
    /// groups are untouched.
    ///
    /// [`is_valid`]: Self::is_valid
    #[must_use]
    pub fn is_valid_at(&self, pos: Position) -> bool {
        group_is_valid(self.row(pos.y()))
            && group_is_valid(self.column(pos.x()))
            && group_is_valid(self.block(pos.box_index()))
    }

    /// Returns the first empty cell in row-major order (row 0 left to right,
    /// then row 1, and so on), or `None` if the board is full.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self[pos].is_none())
    }

    /// Returns the digits that can be placed at `pos` without immediately
    /// violating row, column, or block uniqueness.
    ///
    /// Returns [`DigitSet::EMPTY`] if the cell is already filled. Iterating
    /// the result yields digits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Board, Digit, Position};
    ///
    /// let mut board = Board::empty();
    /// board[Position::new(0, 0)] = Some(Digit::D1);
    /// board[Position::new(1, 1)] = Some(Digit::D2); // same block as (0, 1)
    ///
    /// let candidates = board.candidates(Position::new(0, 1));
    /// assert!(!candidates.contains(Digit::D1)); // same column
    /// assert!(!candidates.contains(Digit::D2)); // same block
    /// assert_eq!(candidates.len(), 7);
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        if self[pos].is_some() {
            return DigitSet::EMPTY;
        }
        let used: DigitSet = self
            .row(pos.y())
            .chain(self.column(pos.x()))
            .chain(self.block(pos.box_index()))
            .flatten()
            .collect();
        DigitSet::FULL.difference(used)
    }

    /// Renders the board as a human-readable grid.
    ///
    /// Digits are grouped in threes separated by `|`, empty cells are
    /// rendered as a space, and 13-dash separator lines appear before row 0
    /// and after rows 2, 5, and 8. There is no trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Board;
    ///
    /// let board = Board::empty();
    /// assert!(board.to_text().starts_with("-------------\n|   |   |   |"));
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.0[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.0[pos.index()]
    }
}

impl FromStr for Board {
    type Err = FormatError;

    /// Parses a board from 9 newline-separated rows of 9 characters.
    fn from_str(s: &str) -> Result<Self, FormatError> {
        let lines: Vec<_> = s.lines().collect();
        Self::from_lines(&lines)
    }
}

impl Display for Board {
    /// Formats the board in the fixed grid layout described by
    /// [`to_text`](Self::to_text).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SEPARATOR)?;
        for y in 0..9 {
            f.write_str("\n|")?;
            for x in 0..9 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(" ")?,
                }
                if x % 3 == 2 {
                    f.write_str("|")?;
                }
            }
            if y % 3 == 2 {
                write!(f, "\n{SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
