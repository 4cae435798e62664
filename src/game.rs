//! Turn loop for engine-versus-engine games.
//!
//! A [`Game`] owns the real position and asks each side's player for a move
//! in turn. Configuration is validated when the game is created, never in
//! the middle of a search.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::search::{search, SearchConfig, SearchReport};
use crate::board::{Board, Color, ConfigError, Move};

/// How one side picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Search with the given configuration
    Engine(SearchConfig),
    /// Uniformly random legal move from a seeded generator
    Random { seed: u64 },
}

/// Game setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub red: PlayerKind,
    pub black: PlayerKind,
    pub first_to_move: Color,
    /// The game is drawn once this many plies have been played
    pub max_plies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red: PlayerKind::Engine(SearchConfig::default()),
            black: PlayerKind::Engine(SearchConfig::default()),
            first_to_move: Color::Red,
            max_plies: 200,
        }
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The other side had no legal move
    Winner(Color),
    /// Ply limit reached
    Draw,
}

/// One played turn.
#[derive(Clone, Copy, Debug)]
pub struct Turn {
    pub color: Color,
    pub mv: Move,
    /// Search summary, for engine players
    pub report: Option<SearchReport>,
}

enum Player {
    Engine(SearchConfig),
    Random(StdRng),
}

impl Player {
    fn from_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Engine(config) => Player::Engine(config),
            PlayerKind::Random { seed } => Player::Random(StdRng::seed_from_u64(seed)),
        }
    }

    fn choose(&mut self, board: &Board, color: Color) -> (Move, Option<SearchReport>) {
        match self {
            Player::Engine(config) => {
                let result = search(board, color, config);
                let report = SearchReport::new(color, config, &result);
                (result.best_move.unwrap_or_else(Move::null), Some(report))
            }
            Player::Random(rng) => {
                let moves = board.legal_moves(color);
                let mv = moves.as_slice().choose(rng).copied();
                (mv.unwrap_or_else(Move::null), None)
            }
        }
    }
}

/// A game in progress.
pub struct Game {
    board: Board,
    to_move: Color,
    players: [Player; 2],
    plies: u32,
    max_plies: u32,
    history: Vec<Move>,
}

impl Game {
    /// Start a game from the opening position.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Game::from_position(config, Board::new())
    }

    /// Start a game from an arbitrary position.
    pub fn from_position(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        if config.max_plies == 0 {
            return Err(ConfigError::InvalidPlyLimit);
        }
        Ok(Game {
            board,
            to_move: config.first_to_move,
            players: [
                Player::from_kind(config.red),
                Player::from_kind(config.black),
            ],
            plies: 0,
            max_plies: config.max_plies,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.board.legal_moves(self.to_move).is_empty() {
            Some(GameOutcome::Winner(self.to_move.opponent()))
        } else if self.plies >= self.max_plies {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Let the side to move play. Returns `None` if the game is already over.
    pub fn play_turn(&mut self) -> Option<Turn> {
        if self.outcome().is_some() {
            return None;
        }
        let color = self.to_move;
        let (mv, report) = self.players[color.index()].choose(&self.board, color);
        if mv.is_null() {
            return None;
        }

        #[cfg(feature = "logging")]
        log::trace!("ply {} {} plays {}", self.plies + 1, color, mv);

        self.board = self.board.apply_move(&mv, color);
        self.history.push(mv);
        self.plies += 1;
        self.to_move = color.opponent();
        Some(Turn { color, mv, report })
    }

    /// Play until one side cannot move or the ply limit is reached.
    pub fn play_to_end(&mut self) -> GameOutcome {
        loop {
            if let Some(outcome) = self.outcome() {
                #[cfg(feature = "logging")]
                log::debug!("game over after {} plies: {:?}", self.plies, outcome);
                return outcome;
            }
            if self.play_turn().is_none() {
                return GameOutcome::Winner(self.to_move.opponent());
            }
        }
    }
}
