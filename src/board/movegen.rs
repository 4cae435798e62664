//! Legal move generation.
//!
//! Captures are mandatory: when any jump exists for the side to move, only
//! jump chains are returned. Every chain is played out to its end; a man that
//! is crowned mid-chain stops on the crowning square.

use super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// All legal moves for `color`.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let jumps = self.jump_moves(color);
        if !jumps.is_empty() {
            return jumps;
        }
        let mut moves = MoveList::new();
        for from in self.pieces(color).squares() {
            self.collect_simple_moves(color, from, &mut moves);
        }
        moves
    }

    /// Every complete jump chain available to `color`.
    #[must_use]
    pub fn jump_moves(&self, color: Color) -> MoveList {
        let mut jumps = MoveList::new();
        for from in self.pieces(color).squares() {
            let was_king = self.pieces(color).is_king(from);
            self.collect_jumps(color, Move::chain_root(from), was_king, &mut jumps);
        }
        jumps
    }

    /// Whether `color` has at least one capture available.
    #[must_use]
    pub fn has_jump(&self, color: Color) -> bool {
        self.pieces(color)
            .squares()
            .any(|from| self.playable_jumps(color, from).next().is_some())
    }

    /// Single jumps the piece of `color` on `from` can make right now.
    fn playable_jumps(
        &self,
        color: Color,
        from: Square,
    ) -> impl Iterator<Item = (Square, Square)> + '_ {
        let is_king = self.pieces(color).is_king(from);
        let opponent = self.pieces(color.opponent());
        self.table
            .links(from)
            .jumps()
            .filter(move |&(to, captured)| {
                (is_king || color.is_forward(from, to))
                    && self.is_empty(to)
                    && opponent.is_occupied(captured)
            })
    }

    /// Extend `chain` from its current square on `self`, which already
    /// reflects every jump taken so far, and record each finished chain.
    fn collect_jumps(&self, color: Color, chain: Move, was_king: bool, out: &mut MoveList) {
        let at = chain.destination().unwrap_or_else(|| chain.start());
        let mut extended = false;

        // A man crowned by the previous jump ends the turn there.
        if self.pieces(color).is_king(at) == was_king {
            for (to, captured) in self.playable_jumps(color, at) {
                let step = Move::chain_root(at).extended(to, captured);
                let next = self.apply_move(&step, color);
                next.collect_jumps(color, chain.extended(to, captured), was_king, out);
                extended = true;
            }
        }

        if !extended && chain.is_jump() {
            out.push(chain);
        }
    }

    fn collect_simple_moves(&self, color: Color, from: Square, out: &mut MoveList) {
        let is_king = self.pieces(color).is_king(from);
        for &to in self.table.links(from).simple_moves() {
            if (is_king || color.is_forward(from, to)) && self.is_empty(to) {
                out.push(Move::simple(from, to));
            }
        }
    }

    /// Count leaf positions `depth` plies ahead, sides alternating from `color`.
    #[must_use]
    pub fn perft(&self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| self.apply_move(mv, color).perft(color.opponent(), depth - 1))
            .sum()
    }
}
