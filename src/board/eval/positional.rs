//! Piece-square evaluation.

use crate::board::{Board, Color, PieceKind, Square};

use super::tables::{KING_TABLE, MAN_TABLE};

/// Index into a table written from RED's side.
#[inline]
fn table_index(color: Color, square: Square) -> usize {
    match color {
        Color::Red => square.index(),
        Color::Black => 31 - square.index(),
    }
}

impl Board {
    fn square_bonus(&self, color: Color) -> i32 {
        let set = self.pieces(color);
        set.squares()
            .map(|sq| {
                let idx = table_index(color, sq);
                match set.piece_at(sq) {
                    Some(PieceKind::King) => KING_TABLE[idx],
                    _ => MAN_TABLE[idx],
                }
            })
            .sum()
    }

    /// Material plus per-square placement bonuses for both sides.
    pub(super) fn eval_positional(&self, color: Color) -> i32 {
        self.material_balance(color) + self.square_bonus(color)
            - self.square_bonus(color.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_mirror_between_colors() {
        let sq = Square::from_number;
        assert_eq!(table_index(Color::Red, sq(1)), table_index(Color::Black, sq(32)));
        assert_eq!(table_index(Color::Red, sq(14)), table_index(Color::Black, sq(19)));
    }
}
