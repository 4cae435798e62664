//! Minimax with alpha-beta pruning in negamax form.
//!
//! Every node maximises from the point of view of its side to move. A child's
//! value is negated on the way up and the window `(alpha, beta)` becomes
//! `(-beta, -alpha)` on the way down.

use super::constants::SCORE_INFINITY;
use super::SearchContext;
use crate::board::{Board, Color, Move};

/// Search `board` with `side` to move. Returns the value from `side`'s point
/// of view and the move that achieved it (`None` at a leaf).
pub(super) fn minimax_ab(
    ctx: &mut SearchContext,
    board: &Board,
    depth: i32,
    side: Color,
    mut alpha: i32,
    beta: i32,
) -> (i32, Option<Move>) {
    if depth <= 0 {
        return (ctx.leaf_for(board, side), None);
    }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return (ctx.leaf_for(board, side), None);
    }
    ctx.stats.expanded += 1;

    let mut best_value = -SCORE_INFINITY;
    let mut best_move = None;
    for mv in &moves {
        let child = board.apply_move(mv, side);
        let (child_value, _) = minimax_ab(ctx, &child, depth - 1, side.opponent(), -beta, -alpha);
        let value = -child_value;

        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(*mv);
        }
        if best_value >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
        alpha = alpha.max(best_value);
    }
    (best_value, best_move)
}
