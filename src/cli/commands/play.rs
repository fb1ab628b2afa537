//! Play command - play Connect Four against the computer.

use std::io;

use gametree::connect_four::{ChainHeuristic, ConnectFourBoard, Player, COLS, EMPTY_POSITION};
use gametree::engine::minimax_alphabeta;
use structopt::StructOpt;
use termion::clear;

use super::util::{chosen_column, display_column};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "p", long = "piece", default_value = "random")]
    pub piece: Player,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: ConnectFourBoard,
}

impl Command for PlayArgs {
    fn execute(self) {
        if self.depth < 1 {
            eprintln!("--depth must be at least 1");
            return;
        }
        let mut board = self.starting_position;
        let human = self.piece;
        let heuristic = ChainHeuristic::default();

        println!("{}", clear::All);
        println!("You are playing {}.", human);
        loop {
            println!("{}", board);

            if let Some(winner) = board.winner() {
                if winner == human {
                    println!("You win!");
                } else {
                    println!("The computer wins.");
                }
                break;
            }
            if board.is_full() {
                println!("The game is a draw.");
                break;
            }

            let col = if board.whose_turn() == human {
                match read_column() {
                    Ok(col) => col,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                }
            } else {
                let maximize = board.whose_turn() == Player::One;
                let result = minimax_alphabeta(
                    &board,
                    i16::MIN,
                    i16::MAX,
                    &heuristic,
                    Some(self.depth),
                    maximize,
                )
                .expect("a live board is always searchable");
                chosen_column(&result).expect("a live board always yields a first move")
            };

            match board.add_piece(col) {
                Ok(next) => {
                    println!("{}", clear::All);
                    let mover = if next.whose_turn() == human {
                        "computer"
                    } else {
                        "you"
                    };
                    println!("{} chose column {}", mover, display_column(col));
                    board = next;
                }
                Err(error) => println!("error: {}", error),
            }
        }
    }
}

fn read_column() -> Result<usize, String> {
    println!("enter a column (1-{}):", COLS);
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|err| err.to_string())?;
    let col: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("please enter a number between 1 and {}", COLS))?;
    if col < 1 || col > COLS {
        return Err(format!("please enter a number between 1 and {}", COLS));
    }
    Ok(col - 1)
}
