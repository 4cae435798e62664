//! Error types for board, notation and search configuration.

use std::fmt;

use super::Color;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Square number outside 1..=32
    OutOfRange { square: u8 },
    /// Text that is not a square number
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { square } => {
                write!(f, "Square {square} out of range (must be 1-32)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for raw positions that break the board invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square number outside 1..=32
    InvalidSquare { square: u8 },
    /// Both sides occupy the same square
    Overlap { square: u8 },
    /// King flag set on a square the side does not occupy
    OrphanKing { color: Color, square: u8 },
    /// More pieces than a side can have
    TooManyPieces { color: Color, count: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSquare { square } => {
                write!(f, "Cannot place a piece on square {square} (must be 1-32)")
            }
            BoardError::Overlap { square } => {
                write!(f, "Square {square} is occupied by both sides")
            }
            BoardError::OrphanKing { color, square } => {
                write!(f, "{color} king flag set on empty square {square}")
            }
            BoardError::TooManyPieces { color, count } => {
                write!(f, "{color} has {count} pieces, at most 12 allowed")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Empty move string
    Empty,
    /// Token that is not a square number
    InvalidSquare { token: String },
    /// Both `-` and `x` used in one move
    MixedSeparators { notation: String },
    /// Fewer than two squares
    TooFewSquares { notation: String },
    /// A simple move with more than two squares
    TooManySquares { notation: String },
    /// A chain longer than any legal capture sequence
    TooManyJumps { jumps: usize },
    /// Two consecutive squares not one step (or one jump) apart diagonally
    NotDiagonal { from: u8, to: u8 },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Empty move string"),
            MoveParseError::InvalidSquare { token } => {
                write!(f, "Invalid square '{token}' in move")
            }
            MoveParseError::MixedSeparators { notation } => {
                write!(f, "Move '{notation}' mixes '-' and 'x'")
            }
            MoveParseError::TooFewSquares { notation } => {
                write!(f, "Move '{notation}' needs at least two squares")
            }
            MoveParseError::TooManySquares { notation } => {
                write!(f, "Simple move '{notation}' must name exactly two squares")
            }
            MoveParseError::TooManyJumps { jumps } => {
                write!(f, "Jump chain of {jumps} captures is longer than possible")
            }
            MoveParseError::NotDiagonal { from, to } => {
                write!(f, "Squares {from} and {to} are not on a shared diagonal step")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for rejected search or game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Search depth above the supported maximum
    DepthOutOfRange { depth: u32, max: u32 },
    /// Algorithm selector with no matching algorithm
    UnknownAlgorithm { index: usize },
    /// Evaluator selector with no matching evaluation function
    UnknownEvaluator { index: usize },
    /// A game must be allowed at least one ply
    InvalidPlyLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DepthOutOfRange { depth, max } => {
                write!(f, "Search depth {depth} out of range (must be 0-{max})")
            }
            ConfigError::UnknownAlgorithm { index } => {
                write!(f, "Unknown search algorithm {index}")
            }
            ConfigError::UnknownEvaluator { index } => {
                write!(f, "Unknown evaluation function {index}")
            }
            ConfigError::InvalidPlyLimit => write!(f, "Ply limit must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
