//! Capture-aware evaluation: safe captures, long chains, hanging pieces.

use crate::board::{Board, Color};

use super::tables::{CHAIN_BONUS, HANGING_PENALTY, SAFE_CAPTURE_BONUS};

impl Board {
    /// Squares holding `color` pieces that the opponent can capture now.
    #[must_use]
    pub fn hanging_pieces(&self, color: Color) -> u32 {
        let mut threatened = 0u32;
        for mv in &self.jump_moves(color.opponent()) {
            for sq in mv.captures() {
                threatened |= 1 << sq.index();
            }
        }
        threatened
    }

    /// Tactical signals for one side, without the opponent's share.
    fn tactical_terms(&self, color: Color) -> i32 {
        let jumps = self.jump_moves(color);

        let safe_captures = jumps
            .iter()
            .filter(|mv| {
                let Some(landing) = mv.destination() else {
                    return false;
                };
                let after = self.apply_move(mv, color);
                after.hanging_pieces(color) & (1 << landing.index()) == 0
            })
            .count() as i32;

        let longest = jumps.iter().map(|mv| mv.jump_count()).max().unwrap_or(0) as i32;
        let chain_extra = (longest - 1).max(0);

        let hanging = self.hanging_pieces(color).count_ones() as i32;

        SAFE_CAPTURE_BONUS * safe_captures + CHAIN_BONUS * chain_extra - HANGING_PENALTY * hanging
    }

    /// Material plus immediate tactics for both sides.
    pub(super) fn eval_tactical(&self, color: Color) -> i32 {
        self.material_balance(color) + self.tactical_terms(color)
            - self.tactical_terms(color.opponent())
    }
}
