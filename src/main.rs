use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::GameTree;

mod cli;

fn main() {
    env_logger::init();
    GameTree::from_args().execute();
}
