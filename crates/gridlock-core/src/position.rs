//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

/// A position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions map to a row-major index 0-80 via [`index`](Self::index).
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(pos.box_index(), 1); // top-center 3x3 block
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-80) of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Creates a position from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self::new(x, y)
    }

    /// Returns an iterator over all 81 positions in row-major order
    /// (row 0 left to right, then row 1, and so on).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Position;
    ///
    /// let all: Vec<_> = Position::all().collect();
    /// assert_eq!(all.len(), 81);
    /// assert_eq!(all[0], Position::new(0, 0));
    /// assert_eq!(all[10], Position::new(1, 1));
    /// assert_eq!(all[80], Position::new(8, 8));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }

    /// Returns the index (0-8) of the 3x3 block containing this position,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3x3 block containing this
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Position;
    ///
    /// assert_eq!(Position::new(4, 7).box_origin(), Position::new(3, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self::new(self.x / 3 * 3, self.y / 3 * 3)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
