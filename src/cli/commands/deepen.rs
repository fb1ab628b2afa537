//! Deepen command - progressive deepening with anytime reporting.

use gametree::connect_four::{ChainHeuristic, ConnectFourBoard, EMPTY_POSITION};
use gametree::engine::{progressive_deepen, GameState};
use structopt::StructOpt;

use super::util::{chosen_column, display_column, maximize_for};
use super::Command;

#[derive(StructOpt)]
pub struct DeepenArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: ConnectFourBoard,
}

impl Command for DeepenArgs {
    fn execute(self) {
        let board = self.starting_position;
        if board.is_terminal() {
            eprintln!("There are no moves left in the given position.");
            return;
        }

        let heuristic = ChainHeuristic::default();
        let maximize = maximize_for(&board);

        let anytime = match progressive_deepen(&board, &heuristic, self.depth, maximize) {
            Ok(anytime) => anytime,
            Err(err) => {
                eprintln!("Progressive deepening failed: {}", err);
                return;
            }
        };

        for (i, result) in anytime.history().iter().enumerate() {
            let col = chosen_column(result)
                .expect("a searchable position always yields a first move");
            println!(
                "depth {}: column {}, score {}, {} evaluations",
                i + 1,
                display_column(col),
                result.score,
                result.evaluations
            );
        }
        println!("total evaluations: {}", anytime.total_evaluations());
    }
}
