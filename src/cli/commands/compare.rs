//! Compare command - race plain minimax against alpha-beta pruning.

use std::time::Instant;

use gametree::connect_four::{ChainHeuristic, ConnectFourBoard, EMPTY_POSITION};
use gametree::engine::{minimax, minimax_alphabeta, GameState, SearchError, SearchResult};
use structopt::StructOpt;

use super::util::maximize_for;
use super::Command;

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: ConnectFourBoard,
}

impl Command for CompareArgs {
    fn execute(self) {
        if self.depth < 1 {
            eprintln!("--depth must be at least 1");
            return;
        }
        let depth = self.depth;
        let board = self.starting_position;
        if board.is_terminal() {
            eprintln!("There are no moves left in the given position.");
            return;
        }

        let heuristic = ChainHeuristic::default();
        let maximize = maximize_for(&board);

        let run = |name: &str,
                   search: &dyn Fn() -> Result<SearchResult<ConnectFourBoard>, SearchError>| {
            let starting_time = Instant::now();
            match search() {
                Ok(result) => {
                    let duration = starting_time.elapsed();
                    println!(
                        "{:>10}: score {}, {} evaluations, {:?}",
                        name, result.score, result.evaluations, duration
                    );
                    Some(result.score)
                }
                Err(err) => {
                    eprintln!("{:>10}: search failed: {}", name, err);
                    None
                }
            }
        };

        println!("Searching to depth {}...", depth);
        let plain = run("minimax", &|| {
            minimax(&board, &heuristic, Some(depth), maximize)
        });
        let pruned = run("alpha-beta", &|| {
            minimax_alphabeta(
                &board,
                i16::MIN,
                i16::MAX,
                &heuristic,
                Some(depth),
                maximize,
            )
        });

        if let (Some(plain), Some(pruned)) = (plain, pruned) {
            if plain == pruned {
                println!("Both strategies agree on the score.");
            } else {
                println!("Score mismatch: {} vs {}.", plain, pruned);
            }
        }
    }
}
