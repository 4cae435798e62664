//! Per-side occupancy and king flags packed into one 64-bit word.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// Low half: occupancy of squares 1..=32 (square `s` at bit `s - 1`).
/// High half: king flags, square `s` at bit `s + 31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSet(pub u64);

const OCCUPANCY_MASK: u64 = 0x0000_0000_FFFF_FFFF;
const KING_SHIFT: u32 = 32;

impl PieceSet {
    pub const EMPTY: PieceSet = PieceSet(0);

    #[inline]
    const fn occupancy_bit(square: Square) -> u64 {
        1u64 << square.index()
    }

    #[inline]
    const fn king_bit(square: Square) -> u64 {
        1u64 << (square.index() as u32 + KING_SHIFT)
    }

    /// Occupancy half of the word, one bit per square.
    #[inline]
    #[must_use]
    pub const fn occupancy(self) -> u32 {
        (self.0 & OCCUPANCY_MASK) as u32
    }

    /// King half of the word, aligned with [`PieceSet::occupancy`].
    #[inline]
    #[must_use]
    pub const fn kings(self) -> u32 {
        (self.0 >> KING_SHIFT) as u32
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(self, square: Square) -> bool {
        self.0 & Self::occupancy_bit(square) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self, square: Square) -> bool {
        self.0 & Self::king_bit(square) != 0
    }

    #[inline]
    pub fn set_occupied(&mut self, square: Square, value: bool) {
        if value {
            self.0 |= Self::occupancy_bit(square);
        } else {
            self.0 &= !Self::occupancy_bit(square);
        }
    }

    #[inline]
    pub fn set_king(&mut self, square: Square, value: bool) {
        if value {
            self.0 |= Self::king_bit(square);
        } else {
            self.0 &= !Self::king_bit(square);
        }
    }

    /// Remove whatever stands on `square`, king flag included.
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(Self::occupancy_bit(square) | Self::king_bit(square));
    }

    #[inline]
    #[must_use]
    pub fn piece_at(self, square: Square) -> Option<PieceKind> {
        if !self.is_occupied(square) {
            None
        } else if self.is_king(square) {
            Some(PieceKind::King)
        } else {
            Some(PieceKind::Man)
        }
    }

    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.occupancy().count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn king_count(self) -> u32 {
        self.kings().count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn men_count(self) -> u32 {
        (self.occupancy() & !self.kings()).count_ones()
    }

    /// King bits whose square is not occupied.
    #[inline]
    #[must_use]
    pub(crate) const fn orphan_kings(self) -> u32 {
        self.kings() & !self.occupancy()
    }

    /// Iterate over occupied squares in ascending order.
    #[inline]
    #[must_use]
    pub fn squares(self) -> SquareIter {
        SquareIter(self.occupancy())
    }
}

/// Iterator over the occupied squares of a [`PieceSet`].
pub struct SquareIter(u32);

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::from_number(idx + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}
