//! Alpha-beta search as mutually recursive max-value / min-value.
//!
//! Values are always from the root player's point of view: the root player
//! maximises, the opponent minimises, and the window keeps one fixed sense.

use super::constants::SCORE_INFINITY;
use super::SearchContext;
use crate::board::{Board, Color, Move};

pub(super) fn max_value(
    ctx: &mut SearchContext,
    board: &Board,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    side: Color,
) -> (i32, Option<Move>) {
    if depth <= 0 {
        return (ctx.leaf(board), None);
    }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return (ctx.leaf(board), None);
    }
    ctx.stats.expanded += 1;

    let mut best_value = -SCORE_INFINITY;
    let mut best_move = None;
    for mv in &moves {
        let child = board.apply_move(mv, side);
        let (value, _) = min_value(ctx, &child, depth - 1, alpha, beta, side.opponent());
        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(*mv);
        }
        if best_value >= beta {
            ctx.stats.cutoffs += 1;
            return (best_value, best_move);
        }
        alpha = alpha.max(best_value);
    }
    (best_value, best_move)
}

pub(super) fn min_value(
    ctx: &mut SearchContext,
    board: &Board,
    depth: i32,
    alpha: i32,
    mut beta: i32,
    side: Color,
) -> (i32, Option<Move>) {
    if depth <= 0 {
        return (ctx.leaf(board), None);
    }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return (ctx.leaf(board), None);
    }
    ctx.stats.expanded += 1;

    let mut best_value = SCORE_INFINITY;
    let mut best_move = None;
    for mv in &moves {
        let child = board.apply_move(mv, side);
        let (value, _) = max_value(ctx, &child, depth - 1, alpha, beta, side.opponent());
        if best_move.is_none() || value < best_value {
            best_value = value;
            best_move = Some(*mv);
        }
        if best_value <= alpha {
            ctx.stats.cutoffs += 1;
            return (best_value, best_move);
        }
        beta = beta.min(best_value);
    }
    (best_value, best_move)
}
