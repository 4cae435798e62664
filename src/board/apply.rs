//! Functional move application.

use super::{Board, Color, Move};

impl Board {
    /// Return the position after `color` plays `mv`. The receiver is unchanged.
    ///
    /// A man is crowned only if the final landing square of the whole move is
    /// on the far row. Every captured piece is removed, king or not. The null
    /// move yields an identical board.
    #[must_use]
    pub fn apply_move(&self, mv: &Move, color: Color) -> Board {
        let Some(to) = mv.destination() else {
            return *self;
        };
        let from = mv.start();

        let mut next = *self;
        let mover = &mut next.pieces[color.index()];
        let was_king = mover.is_king(from);

        mover.set_occupied(to, true);
        if from != to {
            mover.set_occupied(from, false);
        }
        mover.set_king(from, false);
        mover.set_king(to, was_king || color.is_crowning_square(to));

        let opponent = &mut next.pieces[color.opponent().index()];
        for &captured in mv.captures() {
            opponent.clear(captured);
        }
        next
    }
}
