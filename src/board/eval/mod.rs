//! Static evaluation.
//!
//! Three interchangeable heuristics score a position from one side's point of
//! view, higher being better for that side:
//! - `Material` - men and kings weighted, plus mobility
//! - `Positional` - material plus piece-square tables
//! - `Tactical` - material plus safe captures, chain length and hanging pieces
//!
//! Every heuristic shares the terminal shortcut: a side with no legal move
//! scores `-WIN_SCORE`, its opponent `WIN_SCORE`.

mod material;
mod positional;
mod tactical;
pub mod tables;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, ConfigError};
pub use tables::WIN_SCORE;

/// Selectable evaluation function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Evaluator {
    #[default]
    Material,
    Positional,
    Tactical,
}

impl Evaluator {
    /// All evaluators in selector order.
    pub const ALL: [Evaluator; 3] = [
        Evaluator::Material,
        Evaluator::Positional,
        Evaluator::Tactical,
    ];

    /// Score `board` from `color`'s perspective.
    #[must_use]
    pub fn evaluate(self, board: &Board, color: Color) -> i32 {
        let own_moves = board.legal_moves(color).len() as i32;
        if own_moves == 0 {
            return -WIN_SCORE;
        }
        let their_moves = board.legal_moves(color.opponent()).len() as i32;
        if their_moves == 0 {
            return WIN_SCORE;
        }

        match self {
            Evaluator::Material => board.eval_material(color, own_moves - their_moves),
            Evaluator::Positional => board.eval_positional(color),
            Evaluator::Tactical => board.eval_tactical(color),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Evaluator::Material => "material",
            Evaluator::Positional => "positional",
            Evaluator::Tactical => "tactical",
        }
    }
}

impl TryFrom<usize> for Evaluator {
    type Error = ConfigError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Evaluator::ALL
            .get(index)
            .copied()
            .ok_or(ConfigError::UnknownEvaluator { index })
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
