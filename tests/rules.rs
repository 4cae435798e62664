//! Rules scenarios exercised through the public API.

use checkers_engine::board::{BoardBuilder, BoardError, MoveParseError};
use checkers_engine::{
    best_move, Board, Color, Evaluator, Move, PieceKind, SearchAlgorithm, Square,
};

fn square(n: u8) -> Square {
    Square::new(n).unwrap()
}

#[test]
fn opening_offers_seven_single_steps() {
    let board = Board::new();
    let moves = board.legal_moves(Color::Red);
    assert_eq!(moves.len(), 7);
    for mv in &moves {
        assert!(!mv.is_jump());
        assert!((9..=12).contains(&mv.start().number()));
        let to = mv.destination().unwrap();
        assert_eq!(to.row(), mv.start().row() + 1);
    }
}

#[test]
fn lone_jump_from_fourteen() {
    let board = BoardBuilder::new()
        .man(14, Color::Red)
        .man(18, Color::Black)
        .build()
        .unwrap();
    let moves = board.legal_moves(Color::Red);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].start(), square(14));
    assert_eq!(moves[0].destinations(), &[square(23)]);
    assert_eq!(moves[0].captures(), &[square(18)]);
}

#[test]
fn empty_side_has_no_moves_and_null_best_move() {
    let board = BoardBuilder::new().man(14, Color::Red).build().unwrap();
    assert!(board.legal_moves(Color::Black).is_empty());
    let mv = best_move(
        &board,
        Color::Black,
        3,
        SearchAlgorithm::MinimaxAlphaBeta,
        Evaluator::Material,
    )
    .unwrap();
    assert!(mv.destinations().is_empty());
}

#[test]
fn crowned_man_plays_on_as_king() {
    let board = BoardBuilder::new()
        .man(27, Color::Red)
        .man(5, Color::Black)
        .build()
        .unwrap();
    let board = board.apply_move(&"27-32".parse().unwrap(), Color::Red);
    assert_eq!(board.piece_at(Color::Red, square(32)), Some(PieceKind::King));

    let mut moves: Vec<String> = board
        .legal_moves(Color::Red)
        .iter()
        .map(ToString::to_string)
        .collect();
    moves.sort();
    assert_eq!(moves, ["32-27", "32-28"]);
}

#[test]
fn jump_notation_round_trips() {
    let mv: Move = "10x17x26".parse().unwrap();
    assert_eq!(mv.captures(), &[square(14), square(22)]);
    assert_eq!(mv.to_string(), "10x17x26");
    assert_eq!(
        "14x22".parse::<Move>(),
        Err(MoveParseError::NotDiagonal { from: 14, to: 22 })
    );
}

#[test]
fn builder_rejects_bad_squares() {
    assert_eq!(
        BoardBuilder::new().man(33, Color::Red).build(),
        Err(BoardError::InvalidSquare { square: 33 })
    );
    assert!(BoardBuilder::new().man(0, Color::Black).build().is_err());
}

#[test]
fn display_marks_pieces() {
    let text = Board::new().to_string();
    assert!(text.contains('r'));
    assert!(text.contains('b'));
    assert!(!text.contains('R'));
}
