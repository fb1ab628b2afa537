//! Best move command - determine the best column from a position.

use std::str::FromStr;

use gametree::connect_four::{ChainHeuristic, ConnectFourBoard, EMPTY_POSITION};
use gametree::engine::{minimax, minimax_alphabeta, GameState};
use structopt::StructOpt;

use super::util::{chosen_column, display_column, maximize_for};
use super::Command;

#[derive(Debug)]
pub enum SearchStrategy {
    Minimax,
    AlphaBeta,
}

impl FromStr for SearchStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchStrategy::Minimax),
            "alpha-beta" => Ok(SearchStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: minimax, alpha-beta"),
        }
    }
}

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: SearchStrategy,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: ConnectFourBoard,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        if self.depth < 1 {
            eprintln!("--depth must be at least 1");
            return;
        }
        let board = self.starting_position;
        if board.is_terminal() {
            eprintln!("There are no moves left in the given position.");
            return;
        }

        let heuristic = ChainHeuristic::default();
        let maximize = maximize_for(&board);

        let result = match self.strategy {
            SearchStrategy::Minimax => minimax(&board, &heuristic, Some(self.depth), maximize),
            SearchStrategy::AlphaBeta => minimax_alphabeta(
                &board,
                i16::MIN,
                i16::MAX,
                &heuristic,
                Some(self.depth),
                maximize,
            ),
        };

        match result {
            Ok(result) => {
                let col = chosen_column(&result)
                    .expect("a searchable position always yields a first move");
                println!("column: {}", display_column(col));
                println!("score: {} (positive favors X)", result.score);
                println!("evaluations: {}", result.evaluations);
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
