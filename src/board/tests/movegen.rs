//! Move generation tests.

use super::{notation, position, sq};
use crate::board::{Board, Color, Move};

#[test]
fn opening_has_seven_moves_for_each_side() {
    let board = Board::new();

    let red = board.legal_moves(Color::Red);
    assert_eq!(red.len(), 7);
    for mv in &red {
        assert!((9..=12).contains(&mv.start().number()));
        assert_eq!(mv.destinations().len(), 1);
        assert_eq!(mv.destination().unwrap().row(), mv.start().row() + 1);
        assert!(!mv.is_jump());
    }
    assert_eq!(
        notation(red.as_slice()),
        vec!["10-14", "10-15", "11-15", "11-16", "12-16", "9-13", "9-14"]
    );

    let black = board.legal_moves(Color::Black);
    assert_eq!(
        notation(black.as_slice()),
        vec!["21-17", "22-17", "22-18", "23-18", "23-19", "24-19", "24-20"]
    );
}

#[test]
fn single_jump_is_the_only_move() {
    let board = position(&[(14, false)], &[(18, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(moves.len(), 1);
    let mv = moves[0];
    assert_eq!(mv.start(), sq(14));
    assert_eq!(mv.destinations(), &[sq(23)]);
    assert_eq!(mv.captures(), &[sq(18)]);
}

#[test]
fn jump_is_mandatory_over_simple_moves() {
    // The man on 1 has quiet moves, but the capture on 18 must be taken.
    let board = position(&[(1, false), (14, false)], &[(18, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(notation(moves.as_slice()), vec!["14x23"]);
    assert!(board.has_jump(Color::Red));
}

#[test]
fn chain_is_played_to_the_end() {
    let board = position(&[(10, false)], &[(14, false), (22, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(notation(moves.as_slice()), vec!["10x17x26"]);
    assert_eq!(moves[0].captures(), &[sq(14), sq(22)]);
}

#[test]
fn chains_of_different_lengths_are_all_offered() {
    let board = position(&[(10, false)], &[(14, false), (15, false), (22, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(notation(moves.as_slice()), vec!["10x17x26", "10x19"]);
}

#[test]
fn crowning_ends_the_chain() {
    // As a king the piece on 31 could jump 27 next, but a man crowned
    // mid-turn must stop.
    let board = position(&[(22, false)], &[(26, false), (27, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(notation(moves.as_slice()), vec!["22x31"]);
}

#[test]
fn king_jumps_in_both_directions() {
    let board = position(&[(14, true)], &[(18, false), (19, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(notation(moves.as_slice()), vec!["14x23x16"]);

    let man = position(&[(14, false)], &[(18, false), (19, false)]);
    assert_eq!(notation(man.legal_moves(Color::Red).as_slice()), vec!["14x23"]);
}

#[test]
fn king_can_finish_on_its_start_square() {
    let board = position(&[(14, true)], &[(10, false), (11, false), (18, false), (19, false)]);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(notation(moves.as_slice()), vec!["14x23x16x7x14", "14x7x16x23x14"]);
    for mv in &moves {
        assert_eq!(mv.jump_count(), 4);
    }
}

#[test]
fn black_men_jump_toward_lower_numbers() {
    let board = position(&[(14, false)], &[(18, false)]);
    let moves = board.legal_moves(Color::Black);
    assert_eq!(notation(moves.as_slice()), vec!["18x9"]);
}

#[test]
fn occupied_landing_square_blocks_the_jump() {
    let board = position(&[(14, false)], &[(18, false), (23, false)]);
    assert!(!board.has_jump(Color::Red));
    assert_eq!(notation(board.legal_moves(Color::Red).as_slice()), vec!["14-17"]);
}

#[test]
fn man_cannot_jump_backward() {
    let board = position(&[(18, false)], &[(14, false)]);
    let moves = board.legal_moves(Color::Red);
    assert!(moves.iter().all(|mv| !mv.is_jump()));
    assert_eq!(notation(moves.as_slice()), vec!["18-22", "18-23"]);
}

#[test]
fn king_steps_both_ways() {
    let board = position(&[(14, true)], &[]);
    assert_eq!(
        notation(board.legal_moves(Color::Red).as_slice()),
        vec!["14-10", "14-17", "14-18", "14-9"]
    );
}

#[test]
fn side_without_pieces_has_no_moves() {
    let board = position(&[(14, false)], &[]);
    assert!(board.legal_moves(Color::Black).is_empty());
}

#[test]
fn blocked_side_has_no_moves() {
    // The man on 5 can only step to 9, and the jump over 9 lands on 14.
    let board = position(&[(5, false)], &[(9, false), (14, false)]);
    assert!(board.legal_moves(Color::Red).is_empty());
    assert!(!board.legal_moves(Color::Black).is_empty());
}

#[test]
fn parsed_move_matches_generated_move() {
    let board = position(&[(10, false)], &[(14, false), (22, false)]);
    let parsed: Move = "10x17x26".parse().unwrap();
    assert!(board.legal_moves(Color::Red).contains(&parsed));
}
