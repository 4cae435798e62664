//! Square types and utilities.
//!
//! Only the 32 dark squares are playable. They are numbered 1..=32 in the
//! standard checkers order, four to a row, starting from RED's back row:
//!
//! ```text
//!      0   1   2   3   4   5   6   7     (column)
//!   +---+---+---+---+---+---+---+---+
//! 0 |   | 1 |   | 2 |   | 3 |   | 4 |   RED back row
//! 1 | 5 |   | 6 |   | 7 |   | 8 |   |
//! 2 |   | 9 |   |10 |   |11 |   |12 |
//! 3 |13 |   |14 |   |15 |   |16 |   |
//! 4 |   |17 |   |18 |   |19 |   |20 |
//! 5 |21 |   |22 |   |23 |   |24 |   |
//! 6 |   |25 |   |26 |   |27 |   |28 |
//! 7 |29 |   |30 |   |31 |   |32 |   |   BLACK back row
//!   +---+---+---+---+---+---+---+---+
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of playable squares.
pub const NUM_SQUARES: usize = 32;

/// A playable square, numbered 1..=32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Square(u8);

impl Square {
    /// All playable squares in ascending order.
    pub const ALL: [Square; NUM_SQUARES] = {
        let mut all = [Square(1); NUM_SQUARES];
        let mut i = 0;
        while i < NUM_SQUARES {
            all[i] = Square(i as u8 + 1);
            i += 1;
        }
        all
    };

    /// Create a square with bounds checking.
    pub fn new(number: u8) -> Result<Self, SquareError> {
        if (1..=NUM_SQUARES as u8).contains(&number) {
            Ok(Square(number))
        } else {
            Err(SquareError::OutOfRange { square: number })
        }
    }

    /// Create a square without bounds checking. Callers guarantee 1..=32.
    #[inline]
    #[must_use]
    pub(crate) const fn from_number(number: u8) -> Self {
        debug_assert!(number >= 1 && number <= NUM_SQUARES as u8);
        Square(number)
    }

    /// Build the square at `(row, column)` if that coordinate is a dark square.
    #[must_use]
    pub const fn from_coords(row: i8, column: i8) -> Option<Self> {
        if row < 0 || row > 7 || column < 0 || column > 7 {
            return None;
        }
        // Even rows hold the odd columns, odd rows the even ones.
        if (row + column) % 2 == 0 {
            return None;
        }
        Some(Square((row * 4 + column / 2 + 1) as u8))
    }

    /// Square number (1..=32).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index, which is also the occupancy bit position.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Row 0..=7, counted from RED's back row.
    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        ((self.0 - 1) / 4) as i8
    }

    /// Column 0..=7.
    #[inline]
    #[must_use]
    pub const fn column(self) -> i8 {
        let slot = ((self.0 - 1) % 4) as i8;
        if self.row() % 2 == 0 {
            slot * 2 + 1
        } else {
            slot * 2
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Square::new(number)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.trim().parse().map_err(|_| SquareError::InvalidNotation {
            notation: s.to_string(),
        })?;
        Square::new(number)
    }
}
