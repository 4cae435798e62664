use std::fmt;
use std::hash::{Hash, Hasher};

use super::move_table::MoveTable;
use super::{BoardError, Color, PieceKind, PieceSet, Square};

/// Maximum number of pieces one side can own.
pub const MAX_PIECES_PER_SIDE: u32 = 12;

/// A checkers position: one [`PieceSet`] per side plus a reference to the
/// shared topology table.
///
/// `Board` is a small `Copy` value. Applying a move returns a new board and
/// never mutates the receiver, so hypothetical positions explored by the
/// search cannot alias the real game state.
#[derive(Clone, Copy)]
pub struct Board {
    pub(crate) pieces: [PieceSet; 2],
    pub(crate) table: &'static MoveTable,
}

impl Board {
    /// The opening position: RED on 1-12, BLACK on 21-32, no kings.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for n in 1..=12 {
            board.pieces[Color::Red.index()].set_occupied(Square::from_number(n), true);
        }
        for n in 21..=32 {
            board.pieces[Color::Black.index()].set_occupied(Square::from_number(n), true);
        }
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [PieceSet::EMPTY; 2],
            table: MoveTable::shared(),
        }
    }

    /// Build a board from raw piece sets, checking the board invariants.
    pub fn from_piece_sets(red: PieceSet, black: PieceSet) -> Result<Self, BoardError> {
        let overlap = red.occupancy() & black.occupancy();
        if overlap != 0 {
            return Err(BoardError::Overlap {
                square: overlap.trailing_zeros() as u8 + 1,
            });
        }
        for (color, set) in [(Color::Red, red), (Color::Black, black)] {
            let orphans = set.orphan_kings();
            if orphans != 0 {
                return Err(BoardError::OrphanKing {
                    color,
                    square: orphans.trailing_zeros() as u8 + 1,
                });
            }
            if set.count() > MAX_PIECES_PER_SIDE {
                return Err(BoardError::TooManyPieces {
                    color,
                    count: set.count(),
                });
            }
        }
        let mut board = Board::empty();
        board.pieces = [red, black];
        Ok(board)
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color) -> PieceSet {
        self.pieces[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn move_table(&self) -> &'static MoveTable {
        self.table
    }

    /// Occupancy of both sides, one bit per square.
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> u32 {
        self.pieces[0].occupancy() | self.pieces[1].occupancy()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupied() & (1 << square.index()) == 0
    }

    /// What `color` has on `square`, if anything.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        self.pieces[color.index()].piece_at(square)
    }

    /// Owner and kind of whatever stands on `square`.
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<(Color, PieceKind)> {
        Color::BOTH
            .into_iter()
            .find_map(|color| self.piece_at(color, square).map(|kind| (color, kind)))
    }

    #[inline]
    #[must_use]
    pub fn men_count(&self, color: Color) -> u32 {
        self.pieces[color.index()].men_count()
    }

    #[inline]
    #[must_use]
    pub fn king_count(&self, color: Color) -> u32 {
        self.pieces[color.index()].king_count()
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.pieces[color.index()].count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pieces.hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("red", &format_args!("{:#018x}", self.pieces[0].0))
            .field("black", &format_args!("{:#018x}", self.pieces[1].0))
            .finish()
    }
}

/// Plain ASCII diagram, RED's back row at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for column in 0..8 {
                let c = match Square::from_coords(row, column) {
                    None => ' ',
                    Some(sq) => self
                        .occupant(sq)
                        .map_or('.', |(color, kind)| kind.to_char(color)),
                };
                write!(f, "{c}")?;
                if column < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
