//! Material and mobility evaluation.

use crate::board::{Board, Color};

use super::tables::{KING_VALUE, MAN_VALUE, MOBILITY_WEIGHT};

impl Board {
    /// Men and kings of `color` minus the opponent's, weighted.
    #[must_use]
    pub fn material_balance(&self, color: Color) -> i32 {
        let value = |c: Color| {
            self.men_count(c) as i32 * MAN_VALUE + self.king_count(c) as i32 * KING_VALUE
        };
        value(color) - value(color.opponent())
    }

    /// Material plus a small bonus for having more moves than the opponent.
    pub(super) fn eval_material(&self, color: Color, mobility: i32) -> i32 {
        self.material_balance(color) + MOBILITY_WEIGHT * mobility
    }
}
