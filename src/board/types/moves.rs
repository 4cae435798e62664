//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::square::Square;
use crate::board::error::MoveParseError;

/// Longest possible jump chain: a side never has more than 12 pieces to lose.
pub const MAX_JUMPS: usize = 12;

const PAD: Square = Square::from_number(1);

/// Text form of [`Move::null`].
const NULL_NOTATION: &str = "--";

/// One full turn: a start square, the landing squares in order, and the
/// square captured on the way to each landing (empty for a simple move).
///
/// A `Move` is a `Copy` value; jump chains are grown with
/// [`Move::extended`], which returns a new value and leaves the receiver
/// untouched.
#[derive(Clone, Copy)]
pub struct Move {
    start: Square,
    destinations: [Square; MAX_JUMPS],
    captures: [Square; MAX_JUMPS],
    len: u8,
    jump: bool,
}

impl Move {
    /// The "no move available" sentinel: no destinations at all.
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            start: PAD,
            destinations: [PAD; MAX_JUMPS],
            captures: [PAD; MAX_JUMPS],
            len: 0,
            jump: false,
        }
    }

    /// A one-step, non-capturing move.
    #[inline]
    #[must_use]
    pub const fn simple(from: Square, to: Square) -> Self {
        let mut mv = Move::null();
        mv.start = from;
        mv.destinations[0] = to;
        mv.len = 1;
        mv
    }

    /// A jump chain rooted at `from` with no jumps taken yet.
    #[inline]
    #[must_use]
    pub(crate) const fn chain_root(from: Square) -> Self {
        let mut mv = Move::null();
        mv.start = from;
        mv.jump = true;
        mv
    }

    /// This chain with one more jump appended: land on `to`, capture `captured`.
    ///
    /// # Panics
    /// Panics if the chain already holds [`MAX_JUMPS`] jumps.
    #[inline]
    #[must_use]
    pub(crate) fn extended(mut self, to: Square, captured: Square) -> Self {
        debug_assert!(self.jump, "cannot extend a simple move");
        let i = self.len as usize;
        self.destinations[i] = to;
        self.captures[i] = captured;
        self.len += 1;
        self
    }

    /// Build a jump chain from a start square and its landing squares,
    /// deriving each captured square from the geometry.
    pub fn jump_path(from: Square, landings: &[Square]) -> Result<Self, MoveParseError> {
        if landings.is_empty() {
            return Err(MoveParseError::TooFewSquares {
                notation: from.to_string(),
            });
        }
        if landings.len() > MAX_JUMPS {
            return Err(MoveParseError::TooManyJumps {
                jumps: landings.len(),
            });
        }
        let mut mv = Move::chain_root(from);
        let mut at = from;
        for &to in landings {
            let captured = jumped_square(at, to).ok_or(MoveParseError::NotDiagonal {
                from: at.number(),
                to: to.number(),
            })?;
            mv = mv.extended(to, captured);
            at = to;
        }
        Ok(mv)
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Square {
        self.start
    }

    /// Landing squares in order; the last one is the final destination.
    #[inline]
    #[must_use]
    pub fn destinations(&self) -> &[Square] {
        &self.destinations[..self.len as usize]
    }

    /// Captured squares in chain order (empty for a simple move).
    #[inline]
    #[must_use]
    pub fn captures(&self) -> &[Square] {
        if self.jump {
            &self.captures[..self.len as usize]
        } else {
            &[]
        }
    }

    /// Final landing square, `None` for the null move.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> Option<Square> {
        self.destinations().last().copied()
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_jump(&self) -> bool {
        self.jump && self.len > 0
    }

    /// Number of jumps in the chain (0 for a simple move).
    #[inline]
    #[must_use]
    pub const fn jump_count(&self) -> usize {
        if self.jump {
            self.len as usize
        } else {
            0
        }
    }
}

/// Square between `from` and `to` if they are two diagonal steps apart.
pub(crate) fn jumped_square(from: Square, to: Square) -> Option<Square> {
    let dr = to.row() - from.row();
    let dc = to.column() - from.column();
    if dr.abs() != 2 || dc.abs() != 2 {
        return None;
    }
    Square::from_coords(from.row() + dr / 2, from.column() + dc / 2)
}

fn is_adjacent_diagonal(from: Square, to: Square) -> bool {
    (to.row() - from.row()).abs() == 1 && (to.column() - from.column()).abs() == 1
}

impl Default for Move {
    fn default() -> Self {
        Move::null()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return self.is_null() && other.is_null();
        }
        self.start == other.start
            && self.destinations() == other.destinations()
            && self.captures() == other.captures()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_null() {
            0u8.hash(state);
            return;
        }
        self.start.hash(state);
        self.destinations().hash(state);
        self.captures().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        f.debug_struct("Move")
            .field("start", &self.start.number())
            .field(
                "destinations",
                &self.destinations().iter().map(|s| s.number()).collect::<Vec<_>>(),
            )
            .field(
                "captures",
                &self.captures().iter().map(|s| s.number()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Standard checkers notation: `9-13` for a step, `14x23x30` for a chain.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL_NOTATION);
        }
        let sep = if self.jump { 'x' } else { '-' };
        write!(f, "{}", self.start)?;
        for sq in self.destinations() {
            write!(f, "{sep}{sq}")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoveParseError::Empty);
        }
        let has_step = s.contains('-');
        let has_jump = s.contains('x') || s.contains('X');
        if has_step && has_jump {
            return Err(MoveParseError::MixedSeparators {
                notation: s.to_string(),
            });
        }

        let squares = s
            .split(['-', 'x', 'X'])
            .map(|token| {
                token
                    .parse::<Square>()
                    .map_err(|_| MoveParseError::InvalidSquare {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if squares.len() < 2 {
            return Err(MoveParseError::TooFewSquares {
                notation: s.to_string(),
            });
        }

        if has_jump {
            return Move::jump_path(squares[0], &squares[1..]);
        }
        if squares.len() != 2 {
            return Err(MoveParseError::TooManySquares {
                notation: s.to_string(),
            });
        }
        if !is_adjacent_diagonal(squares[0], squares[1]) {
            return Err(MoveParseError::NotDiagonal {
                from: squares[0].number(),
                to: squares[1].number(),
            });
        }
        Ok(Move::simple(squares[0], squares[1]))
    }
}

// Moves travel as their notation so that reading one back goes through the
// same checks as parsing.
#[cfg(feature = "serde")]
impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let notation = String::deserialize(deserializer)?;
        if notation == NULL_NOTATION {
            return Ok(Move::null());
        }
        notation.parse().map_err(serde::de::Error::custom)
    }
}

/// Growable list of moves returned by the generator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.moves.first().copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
