//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Color` and `PieceKind` - sides and man/king distinction
//! - `Square` - one of the 32 playable squares
//! - `PieceSet` - one side's occupancy and king flags in a single `u64`
//! - `Move` and `MoveList` - full-turn move representation

mod moves;
mod piece;
mod piece_set;
mod square;

pub use moves::{Move, MoveList, MAX_JUMPS};
pub use piece::{Color, PieceKind};
pub use piece_set::{PieceSet, SquareIter};
pub use square::{Square, NUM_SQUARES};

pub(crate) use moves::jumped_square;
