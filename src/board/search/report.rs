//! One-line search summaries for logs and the demo binary.

use std::fmt;

use super::{SearchAlgorithm, SearchConfig, SearchResult};
use crate::board::{Color, Evaluator, Move};

/// Summary of a finished search.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    pub color: Color,
    pub algorithm: SearchAlgorithm,
    pub evaluator: Evaluator,
    pub depth: u32,
    pub value: i32,
    pub best_move: Option<Move>,
    pub expanded: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

impl SearchReport {
    #[must_use]
    pub fn new(color: Color, config: &SearchConfig, result: &SearchResult) -> Self {
        SearchReport {
            color,
            algorithm: config.algorithm(),
            evaluator: config.evaluator(),
            depth: config.depth(),
            value: result.value,
            best_move: result.best_move,
            expanded: result.stats.expanded,
            leaves: result.stats.leaves,
            cutoffs: result.stats.cutoffs,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "info side {} algorithm {} eval {} depth {} score {} expanded {} leaves {} cutoffs {} best ",
            self.color,
            self.algorithm,
            self.evaluator,
            self.depth,
            self.value,
            self.expanded,
            self.leaves,
            self.cutoffs,
        )?;
        match self.best_move {
            Some(mv) => write!(f, "{mv}"),
            None => write!(f, "none"),
        }
    }
}
