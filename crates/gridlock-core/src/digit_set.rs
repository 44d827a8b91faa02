//! A set of digits 1-9, optimized for candidate tracking.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast set operations.
/// Iteration always yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// // Start from a full candidate set and eliminate
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// # Set Operations
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// let union = a | b;
/// assert_eq!(
///     union,
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4])
/// );
///
/// let intersection = a & b;
/// assert_eq!(intersection, DigitSet::from_iter([Digit::D2, Digit::D3]));
///
/// let diff = a.difference(b);
/// assert_eq!(diff, DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all digits 1-9.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 |= Self::bit(digit);
        self.0 != old
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 &= !Self::bit(digit);
        self.0 != old
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
    /// let digits: Vec<_> = set.iter().collect();
    /// assert_eq!(digits, vec![Digit::D1, Digit::D5, Digit::D9]);
    /// ```
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Extend<Digit> for DigitSet {
    fn extend<T: IntoIterator<Item = Digit>>(&mut self, iter: T) {
        for digit in iter {
            self.insert(digit);
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl std::iter::FusedIterator for Iter {}
