pub mod board;
pub mod game;

pub use board::{best_move, Board, Color, Evaluator, Move, PieceKind, SearchAlgorithm, Square};
pub use game::{Game, GameConfig, GameOutcome, PlayerKind};
