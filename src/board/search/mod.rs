//! Depth-limited adversarial search.
//!
//! Two independent algorithms are available:
//! - `MinimaxAlphaBeta` - negamax with alpha-beta pruning
//! - `MaxMinAlphaBeta` - textbook max-value / min-value alpha-beta
//!
//! Both score leaves with the configured [`Evaluator`] from the root player's
//! point of view and return the same value for the same position, depth and
//! evaluator; pruning only changes which nodes are visited.
//!
//! The root is always expanded. Its children are searched with `depth - 1`
//! plies to go, so depths 0 and 1 both compare the immediate successors
//! statically.

mod alphabeta;
mod constants;
mod minimax;
pub mod report;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, ConfigError, Evaluator, Move};
pub use constants::{MAX_SEARCH_DEPTH, SCORE_INFINITY};
pub use report::SearchReport;

/// Selectable search algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchAlgorithm {
    #[default]
    MinimaxAlphaBeta,
    MaxMinAlphaBeta,
}

impl SearchAlgorithm {
    /// All algorithms in selector order.
    pub const ALL: [SearchAlgorithm; 2] = [
        SearchAlgorithm::MinimaxAlphaBeta,
        SearchAlgorithm::MaxMinAlphaBeta,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::MinimaxAlphaBeta => "minimax-ab",
            SearchAlgorithm::MaxMinAlphaBeta => "maxmin-ab",
        }
    }
}

impl TryFrom<usize> for SearchAlgorithm {
    type Error = ConfigError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        SearchAlgorithm::ALL
            .get(index)
            .copied()
            .ok_or(ConfigError::UnknownAlgorithm { index })
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawSearchConfig")
)]
pub struct SearchConfig {
    depth: u32,
    algorithm: SearchAlgorithm,
    evaluator: Evaluator,
}

impl SearchConfig {
    /// Create a configuration, rejecting depths above [`MAX_SEARCH_DEPTH`].
    pub fn new(
        depth: u32,
        algorithm: SearchAlgorithm,
        evaluator: Evaluator,
    ) -> Result<Self, ConfigError> {
        if depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::DepthOutOfRange {
                depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(SearchConfig {
            depth,
            algorithm,
            evaluator,
        })
    }

    /// Create a configuration from numeric selectors, as a menu would.
    pub fn from_indices(
        depth: u32,
        algorithm: usize,
        evaluator: usize,
    ) -> Result<Self, ConfigError> {
        SearchConfig::new(
            depth,
            SearchAlgorithm::try_from(algorithm)?,
            Evaluator::try_from(evaluator)?,
        )
    }

    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub const fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn evaluator(&self) -> Evaluator {
        self.evaluator
    }
}

/// Unchecked wire form of [`SearchConfig`]; deserialization validates it
/// with [`SearchConfig::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSearchConfig {
    depth: u32,
    algorithm: SearchAlgorithm,
    evaluator: Evaluator,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSearchConfig> for SearchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSearchConfig) -> Result<Self, Self::Error> {
        SearchConfig::new(raw.depth, raw.algorithm, raw.evaluator)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            algorithm: SearchAlgorithm::default(),
            evaluator: Evaluator::default(),
        }
    }
}

/// Node counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior nodes whose successors were generated
    pub expanded: u64,
    /// Nodes scored by the static evaluator
    pub leaves: u64,
    /// Nodes left early by a pruning cutoff
    pub cutoffs: u64,
}

impl SearchStats {
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.expanded + self.leaves
    }
}

/// Outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the position for the searching side
    pub value: i32,
    /// Best move found, `None` when the side has no legal move
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

/// State shared by every node of one search.
pub(crate) struct SearchContext {
    evaluator: Evaluator,
    root: Color,
    stats: SearchStats,
}

impl SearchContext {
    fn new(evaluator: Evaluator, root: Color) -> Self {
        SearchContext {
            evaluator,
            root,
            stats: SearchStats::default(),
        }
    }

    /// Static value from the root player's point of view.
    fn leaf(&mut self, board: &Board) -> i32 {
        self.stats.leaves += 1;
        self.evaluator.evaluate(board, self.root)
    }

    /// Static value from `side`'s point of view.
    fn leaf_for(&mut self, board: &Board, side: Color) -> i32 {
        let value = self.leaf(board);
        if side == self.root {
            value
        } else {
            -value
        }
    }
}

/// Search for the best move for `color` on `board`.
#[must_use]
pub fn search(board: &Board, color: Color, config: &SearchConfig) -> SearchResult {
    let mut ctx = SearchContext::new(config.evaluator, color);
    let depth = config.depth.clamp(1, MAX_SEARCH_DEPTH) as i32;

    let (value, best_move) = match config.algorithm {
        SearchAlgorithm::MinimaxAlphaBeta => minimax::minimax_ab(
            &mut ctx,
            board,
            depth,
            color,
            -SCORE_INFINITY,
            SCORE_INFINITY,
        ),
        SearchAlgorithm::MaxMinAlphaBeta => alphabeta::max_value(
            &mut ctx,
            board,
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            color,
        ),
    };

    let result = SearchResult {
        value,
        best_move,
        stats: ctx.stats,
    };

    #[cfg(feature = "logging")]
    log::debug!("{}", SearchReport::new(color, config, &result));

    result
}

/// Choose a move for `color`, validating the configuration first.
///
/// Returns [`Move::null`] (no destinations) when `color` has no legal move.
pub fn best_move(
    board: &Board,
    color: Color,
    depth: u32,
    algorithm: SearchAlgorithm,
    evaluator: Evaluator,
) -> Result<Move, ConfigError> {
    let config = SearchConfig::new(depth, algorithm, evaluator)?;
    Ok(search(board, color, &config)
        .best_move
        .unwrap_or_else(Move::null))
}
