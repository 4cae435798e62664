use checkers_engine::board::{Evaluator, SearchAlgorithm, SearchConfig};
use checkers_engine::game::{Game, GameConfig, GameOutcome, PlayerKind};
use checkers_engine::Color;

fn main() {
    let red = SearchConfig::new(6, SearchAlgorithm::MinimaxAlphaBeta, Evaluator::Positional);
    let black = SearchConfig::new(6, SearchAlgorithm::MaxMinAlphaBeta, Evaluator::Tactical);
    let (red, black) = match (red, black) {
        (Ok(red), Ok(black)) => (red, black),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let config = GameConfig {
        red: PlayerKind::Engine(red),
        black: PlayerKind::Engine(black),
        ..GameConfig::default()
    };
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    while let Some(turn) = game.play_turn() {
        if let Some(report) = turn.report {
            println!("{report}");
        }
        println!("{}. {} {}", game.plies(), turn.color, turn.mv);
    }
    print!("{}", game.board());

    match game.play_to_end() {
        GameOutcome::Winner(color) => println!("{color} wins after {} plies", game.plies()),
        GameOutcome::Draw => println!("Draw after {} plies", game.plies()),
    }
    for color in Color::BOTH {
        let board = game.board();
        println!(
            "{color}: {} men, {} kings",
            board.men_count(color),
            board.king_count(color)
        );
    }
}
