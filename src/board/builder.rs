//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than assembling raw
//! piece-set words.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color};
//!
//! let board = BoardBuilder::new()
//!     .man(14, Color::Red)
//!     .man(18, Color::Black)
//!     .king(1, Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_count(Color::Black), 1);
//! ```

use super::{Board, BoardError, Color, PieceKind, PieceSet, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(u8, Color, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for n in 1..=12 {
            builder.pieces.push((n, Color::Red, PieceKind::Man));
        }
        for n in 21..=32 {
            builder.pieces.push((n, Color::Black, PieceKind::Man));
        }
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: u8, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Place a man.
    #[must_use]
    pub fn man(self, square: u8, color: Color) -> Self {
        self.piece(square, color, PieceKind::Man)
    }

    /// Place a king.
    #[must_use]
    pub fn king(self, square: u8, color: Color) -> Self {
        self.piece(square, color, PieceKind::King)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: u8) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, validating square numbers and piece counts.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut sets = [PieceSet::EMPTY; 2];
        for (number, color, kind) in self.pieces {
            let square =
                Square::new(number).map_err(|_| BoardError::InvalidSquare { square: number })?;
            let set = &mut sets[color.index()];
            set.set_occupied(square, true);
            set.set_king(square, kind == PieceKind::King);
        }
        Board::from_piece_sets(sets[0], sets[1])
    }
}
