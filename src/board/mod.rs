//! Checkers board representation and game logic.
//!
//! Each side's pieces live in one 64-bit [`PieceSet`]; a [`Board`] is two of
//! them plus a reference to the shared [`MoveTable`]. Move generation follows
//! English draughts rules: men move and jump forward only, kings both ways,
//! captures are mandatory and jump chains are played to the end.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::Red);
//! println!("Opening position has {} legal moves", moves.len());
//! ```

mod apply;
mod builder;
mod error;
pub mod eval;
mod move_table;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, ConfigError, MoveParseError, SquareError};
pub use eval::Evaluator;
pub use move_table::{MoveTable, SquareLinks};
pub use state::{Board, MAX_PIECES_PER_SIDE};
pub use types::{
    Color, Move, MoveList, PieceKind, PieceSet, Square, SquareIter, MAX_JUMPS, NUM_SQUARES,
};

// Public API - search functions and configuration
pub use search::{
    best_move, search, SearchAlgorithm, SearchConfig, SearchResult, SearchStats,
    MAX_SEARCH_DEPTH,
};
