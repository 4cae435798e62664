//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    best_move, Board, BoardBuilder, Color, ConfigError, Evaluator, Move, MoveList, PieceKind,
    SearchAlgorithm, SearchConfig, Square,
};
