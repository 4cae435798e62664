//! Search tests.
//!
//! Both algorithms are checked against a plain minimax without pruning and
//! against each other.

use super::position;
use crate::board::eval::WIN_SCORE;
use crate::board::search::{search, SearchAlgorithm, SearchConfig};
use crate::board::{best_move, Board, Color, ConfigError, Evaluator, Move};

/// Exhaustive minimax, scored from `root`'s point of view.
fn plain_minimax(
    board: &Board,
    side: Color,
    root: Color,
    depth: u32,
    evaluator: Evaluator,
) -> i32 {
    let moves = board.legal_moves(side);
    if depth == 0 || moves.is_empty() {
        return evaluator.evaluate(board, root);
    }
    let values = moves.iter().map(|mv| {
        let child = board.apply_move(mv, side);
        plain_minimax(&child, side.opponent(), root, depth - 1, evaluator)
    });
    if side == root {
        values.max().unwrap()
    } else {
        values.min().unwrap()
    }
}

fn test_positions() -> Vec<(Board, Color)> {
    vec![
        (Board::new(), Color::Red),
        (Board::new(), Color::Black),
        (
            position(&[(10, false)], &[(14, false), (15, false), (22, false)]),
            Color::Red,
        ),
        (
            position(
                &[(1, false), (6, false), (11, false), (14, true), (20, false)],
                &[(18, false), (23, false), (26, true), (29, false), (31, false)],
            ),
            Color::Black,
        ),
        (
            position(&[(14, true)], &[(10, false), (11, false), (18, false), (19, false)]),
            Color::Red,
        ),
    ]
}

fn config(depth: u32, algorithm: SearchAlgorithm, evaluator: Evaluator) -> SearchConfig {
    SearchConfig::new(depth, algorithm, evaluator).unwrap()
}

#[test]
fn test_both_algorithms_match_plain_minimax() {
    for (board, color) in test_positions() {
        for evaluator in Evaluator::ALL {
            for depth in 1..=3 {
                let expected = plain_minimax(&board, color, color, depth, evaluator);
                for algorithm in SearchAlgorithm::ALL {
                    let result = search(&board, color, &config(depth, algorithm, evaluator));
                    assert_eq!(
                        result.value, expected,
                        "{algorithm} {evaluator} depth {depth}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_algorithms_agree_on_move_and_effort() {
    for (board, color) in test_positions() {
        for evaluator in Evaluator::ALL {
            for depth in [2, 4] {
                let nega = search(
                    &board,
                    color,
                    &config(depth, SearchAlgorithm::MinimaxAlphaBeta, evaluator),
                );
                let maxmin = search(
                    &board,
                    color,
                    &config(depth, SearchAlgorithm::MaxMinAlphaBeta, evaluator),
                );
                assert_eq!(nega.value, maxmin.value);
                assert_eq!(nega.best_move, maxmin.best_move);
                assert_eq!(nega.stats, maxmin.stats);
            }
        }
    }
}

#[test]
fn test_best_move_is_legal() {
    for (board, color) in test_positions() {
        for algorithm in SearchAlgorithm::ALL {
            let mv = best_move(&board, color, 3, algorithm, Evaluator::Positional).unwrap();
            assert!(board.legal_moves(color).contains(&mv), "{mv}");
        }
    }
}

#[test]
fn test_depth_zero_compares_successors() {
    let (board, color) = (Board::new(), Color::Red);
    let moves = board.legal_moves(color);

    // First move with the highest static value.
    let mut expected = moves[0];
    let mut expected_value = i32::MIN;
    for mv in &moves {
        let value = Evaluator::Positional.evaluate(&board.apply_move(mv, color), color);
        if value > expected_value {
            expected_value = value;
            expected = *mv;
        }
    }

    for algorithm in SearchAlgorithm::ALL {
        for depth in [0, 1] {
            let result = search(&board, color, &config(depth, algorithm, Evaluator::Positional));
            assert_eq!(result.best_move, Some(expected));
            assert_eq!(result.value, expected_value);
        }
    }
}

#[test]
fn test_depth_one_prefers_the_longer_capture() {
    let board = position(&[(10, false)], &[(14, false), (15, false), (22, false)]);
    let expected: Move = "10x17x26".parse().unwrap();
    for algorithm in SearchAlgorithm::ALL {
        let mv = best_move(&board, Color::Red, 1, algorithm, Evaluator::Material).unwrap();
        assert_eq!(mv, expected);
    }
}

#[test]
fn test_winning_capture_scores_a_win() {
    let board = position(&[(14, false)], &[(18, false)]);
    for algorithm in SearchAlgorithm::ALL {
        let result = search(&board, Color::Red, &config(3, algorithm, Evaluator::Tactical));
        assert_eq!(result.value, WIN_SCORE);
        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("14x23".into()));
    }
}

#[test]
fn test_no_legal_move_returns_null() {
    let board = position(&[(14, false)], &[]);
    for algorithm in SearchAlgorithm::ALL {
        let result = search(&board, Color::Black, &config(3, algorithm, Evaluator::Material));
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, -WIN_SCORE);

        let mv = best_move(&board, Color::Black, 3, algorithm, Evaluator::Material).unwrap();
        assert!(mv.is_null());
        assert!(mv.destinations().is_empty());
    }
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let board = Board::new();
    assert_eq!(
        best_move(&board, Color::Red, 13, SearchAlgorithm::MinimaxAlphaBeta, Evaluator::Material),
        Err(ConfigError::DepthOutOfRange { depth: 13, max: 12 })
    );
    assert_eq!(
        SearchConfig::from_indices(2, 5, 0),
        Err(ConfigError::UnknownAlgorithm { index: 5 })
    );
    assert_eq!(
        SearchConfig::from_indices(2, 0, 3),
        Err(ConfigError::UnknownEvaluator { index: 3 })
    );
    assert!(SearchConfig::from_indices(12, 1, 2).is_ok());
}

#[test]
fn test_stats_are_collected() {
    let result = search(
        &Board::new(),
        Color::Red,
        &config(4, SearchAlgorithm::MinimaxAlphaBeta, Evaluator::Material),
    );
    assert!(result.stats.expanded > 0);
    assert!(result.stats.leaves > 0);
    assert!(result.stats.cutoffs > 0);
    assert_eq!(result.stats.nodes(), result.stats.expanded + result.stats.leaves);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = Board::new();
    let before = board;
    let _ = search(&board, Color::Red, &SearchConfig::default());
    assert_eq!(board, before);
}
