//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Kind of piece standing on an occupied square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    /// Character used in board diagrams (kings uppercase).
    #[inline]
    #[must_use]
    pub const fn to_char(self, color: Color) -> char {
        match (color, self) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }
}

/// Side colors. RED starts on squares 1-12, BLACK on 21-32.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Whether a man of this color may step from `from` to `to`.
    ///
    /// RED men advance toward higher square numbers, BLACK men toward lower.
    #[inline]
    #[must_use]
    pub(crate) const fn is_forward(self, from: Square, to: Square) -> bool {
        match self {
            Color::Red => to.number() > from.number(),
            Color::Black => to.number() < from.number(),
        }
    }

    /// Whether `square` lies on the row where this color's men are crowned.
    #[inline]
    #[must_use]
    pub const fn is_crowning_square(self, square: Square) -> bool {
        match self {
            Color::Red => square.number() >= 29,
            Color::Black => square.number() <= 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}
