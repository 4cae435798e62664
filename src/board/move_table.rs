//! Precomputed board topology.
//!
//! For each playable square the table lists the diagonal neighbours reachable
//! by a step, the squares two steps away reachable by a jump, and the square
//! captured by each jump. It knows nothing about pieces, sides or kings; the
//! generator applies those restrictions at query time.

use once_cell::sync::Lazy;

use super::types::{jumped_square, Square, NUM_SQUARES};

/// Diagonal directions as (row, column) deltas.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

static MOVE_TABLE: Lazy<MoveTable> = Lazy::new(MoveTable::build);

/// Reachable squares from one square, at most four of each kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareLinks {
    simple: [Square; 4],
    simple_len: u8,
    jump_targets: [Square; 4],
    jump_captures: [Square; 4],
    jump_len: u8,
}

impl SquareLinks {
    const fn empty() -> Self {
        let pad = Square::from_number(1);
        SquareLinks {
            simple: [pad; 4],
            simple_len: 0,
            jump_targets: [pad; 4],
            jump_captures: [pad; 4],
            jump_len: 0,
        }
    }

    /// Diagonal neighbours, in ascending square order.
    #[inline]
    #[must_use]
    pub fn simple_moves(&self) -> &[Square] {
        &self.simple[..self.simple_len as usize]
    }

    /// Landing squares two steps away, in ascending square order.
    #[inline]
    #[must_use]
    pub fn jump_targets(&self) -> &[Square] {
        &self.jump_targets[..self.jump_len as usize]
    }

    /// Square captured by the jump at the same index in [`Self::jump_targets`].
    #[inline]
    #[must_use]
    pub fn jump_captures(&self) -> &[Square] {
        &self.jump_captures[..self.jump_len as usize]
    }

    /// `(landing, captured)` pairs.
    #[inline]
    pub fn jumps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.jump_targets()
            .iter()
            .copied()
            .zip(self.jump_captures().iter().copied())
    }
}

/// Immutable adjacency table for the 32 playable squares.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveTable {
    links: [SquareLinks; NUM_SQUARES],
}

impl MoveTable {
    /// The process-wide table, built on first use.
    #[inline]
    #[must_use]
    pub fn shared() -> &'static MoveTable {
        &MOVE_TABLE
    }

    /// Build a fresh table from the board geometry.
    #[must_use]
    pub(crate) fn build() -> Self {
        let mut links = [SquareLinks::empty(); NUM_SQUARES];
        for from in Square::ALL {
            let entry = &mut links[from.index()];
            // Directions are visited row-major so targets come out ascending.
            for (dr, dc) in DIAGONALS {
                if let Some(to) = Square::from_coords(from.row() + dr, from.column() + dc) {
                    entry.simple[entry.simple_len as usize] = to;
                    entry.simple_len += 1;
                }
                if let Some(to) = Square::from_coords(from.row() + 2 * dr, from.column() + 2 * dc)
                {
                    if let Some(captured) = jumped_square(from, to) {
                        entry.jump_targets[entry.jump_len as usize] = to;
                        entry.jump_captures[entry.jump_len as usize] = captured;
                        entry.jump_len += 1;
                    }
                }
            }
        }
        MoveTable { links }
    }

    #[inline]
    #[must_use]
    pub fn links(&self, square: Square) -> &SquareLinks {
        &self.links[square.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::from_number(n)
    }

    fn numbers(squares: &[Square]) -> Vec<u8> {
        squares.iter().map(|s| s.number()).collect()
    }

    #[test]
    fn shared_table_is_built_once() {
        let a = MoveTable::shared() as *const MoveTable;
        let b = MoveTable::shared() as *const MoveTable;
        assert_eq!(a, b);
        assert_eq!(MoveTable::shared(), &MoveTable::build());
    }

    #[test]
    fn boards_share_the_process_table() {
        let shared = MoveTable::shared() as *const MoveTable;
        assert_eq!(crate::board::Board::new().move_table() as *const MoveTable, shared);
        assert_eq!(crate::board::Board::empty().move_table() as *const MoveTable, shared);
    }

    #[test]
    fn interior_square_has_four_neighbours() {
        let links = MoveTable::shared().links(sq(14));
        assert_eq!(numbers(links.simple_moves()), vec![9, 10, 17, 18]);
        assert_eq!(numbers(links.jump_targets()), vec![5, 7, 21, 23]);
        assert_eq!(numbers(links.jump_captures()), vec![9, 10, 17, 18]);
    }

    #[test]
    fn edge_squares_are_truncated() {
        let table = MoveTable::shared();
        assert_eq!(numbers(table.links(sq(5)).simple_moves()), vec![1, 9]);
        assert_eq!(numbers(table.links(sq(12)).simple_moves()), vec![8, 16]);
        assert_eq!(numbers(table.links(sq(4)).simple_moves()), vec![8]);
        assert_eq!(numbers(table.links(sq(29)).simple_moves()), vec![25]);
        assert_eq!(numbers(table.links(sq(1)).jump_targets()), vec![10]);
        assert_eq!(numbers(table.links(sq(32)).jump_targets()), vec![23]);
    }

    #[test]
    fn every_jump_captures_the_midpoint() {
        let table = MoveTable::shared();
        for from in Square::ALL {
            for (to, captured) in table.links(from).jumps() {
                assert_eq!(jumped_square(from, to), Some(captured));
                assert!(table.links(from).simple_moves().contains(&captured));
                assert!(table.links(to).simple_moves().contains(&captured));
            }
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let table = MoveTable::shared();
        for from in Square::ALL {
            for &to in table.links(from).simple_moves() {
                assert!(table.links(to).simple_moves().contains(&from));
            }
        }
    }
}
