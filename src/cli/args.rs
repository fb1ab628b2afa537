//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, compare::CompareArgs, deepen::DeepenArgs, play::PlayArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "gametree",
    about = "An adversarial game tree search engine, demonstrated on Connect Four 🔴"
)]
pub enum GameTree {
    #[structopt(
        name = "best-move",
        about = "Determine the best column from a given position, provided as a board diagram with `--position` (default: empty board). The search runs at the given `--depth` (default: 4) with the strategy selected by `--strategy` (default: alpha-beta)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "compare",
        about = "Run plain minimax and alpha-beta pruning side by side on the same position at the given `--depth` (default: 4), and report the scores, static evaluation counts, and wall-clock times of both."
    )]
    Compare(CompareArgs),
    #[structopt(
        name = "deepen",
        about = "Search a position with progressive deepening up to the given `--depth` (default: 4), printing the anytime result recorded after each completed pass."
    )]
    Deepen(DeepenArgs),
    #[structopt(
        name = "play",
        about = "Play Connect Four against the computer, which searches with alpha-beta pruning at the given `--depth` (default: 4). Your piece will be chosen at random unless you specify with `--piece`. The initial position can be given as a board diagram with `--position` (default: empty board)."
    )]
    Play(PlayArgs),
}

impl crate::cli::commands::Command for GameTree {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            BestMove(cmd),
            Compare(cmd),
            Deepen(cmd),
            Play(cmd),
        }
    }
}
