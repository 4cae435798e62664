//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal moves, mandatory capture, jump chains
//! - `apply.rs` - Move application, crowning, captures
//! - `perft.rs` - Leaf counts from the opening position
//! - `eval.rs` - Static evaluation functions
//! - `search.rs` - Both search algorithms and configuration
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
mod search;

use crate::board::{Board, BoardBuilder, Color, Move, Square};

pub(super) fn sq(n: u8) -> Square {
    Square::new(n).expect("valid square")
}

pub(super) fn position(red: &[(u8, bool)], black: &[(u8, bool)]) -> Board {
    let mut builder = BoardBuilder::new();
    for &(n, king) in red {
        builder = if king { builder.king(n, Color::Red) } else { builder.man(n, Color::Red) };
    }
    for &(n, king) in black {
        builder = if king { builder.king(n, Color::Black) } else { builder.man(n, Color::Black) };
    }
    builder.build().expect("valid position")
}

pub(super) fn notation(moves: &[Move]) -> Vec<String> {
    let mut text: Vec<String> = moves.iter().map(ToString::to_string).collect();
    text.sort();
    text
}
