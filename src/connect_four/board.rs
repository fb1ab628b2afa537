use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;
use smallvec::SmallVec;
use thiserror::Error;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// An empty board in the diagram notation accepted by [`ConnectFourBoard::from_str`].
pub const EMPTY_POSITION: &str = "......./......./......./......./......./.......";

/// A maximal run of same-player pieces along one scan direction. Single
/// pieces count as chains of length one.
pub type Chain = SmallVec<[(usize, usize); 7]>;

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece = match self {
            Player::One => "X",
            Player::Two => "O",
        };
        write!(f, "{}", piece)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "x" | "X" => Ok(Player::One),
            "o" | "O" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: x, o, random"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("column {col} is out of bounds (columns are 0-6)")]
    ColumnOutOfBounds { col: usize },
    #[error("cell ({row}, {col}) is out of bounds (the board is 6x7)")]
    CellOutOfBounds { row: usize, col: usize },
    #[error("column {col} is full")]
    ColumnFull { col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// Every four-in-a-row window on the 6x7 grid: horizontal, vertical and
/// both diagonals. 69 windows in total.
static WIN_WINDOWS: Lazy<Vec<[(usize, usize); 4]>> = Lazy::new(|| {
    let mut windows = Vec::with_capacity(69);
    for row in 0..ROWS {
        for col in 0..COLS {
            if col + 3 < COLS {
                windows.push([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
            }
            if row + 3 < ROWS {
                windows.push([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
            }
            if row + 3 < ROWS && col + 3 < COLS {
                windows.push([
                    (row, col),
                    (row + 1, col + 1),
                    (row + 2, col + 2),
                    (row + 3, col + 3),
                ]);
            }
            if row + 3 < ROWS && col >= 3 {
                windows.push([
                    (row, col),
                    (row + 1, col - 1),
                    (row + 2, col - 2),
                    (row + 3, col - 3),
                ]);
            }
        }
    }
    windows
});

// Scan directions for chain extraction: right, down, down-right, down-left.
const CHAIN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A 6x7 Connect Four position. Row 0 is the top of the board; pieces
/// dropped into a column come to rest on the lowest empty row.
///
/// Boards are immutable from the search engine's point of view:
/// [`add_piece`](Self::add_piece) returns a new board with the move made
/// and the turn flipped.
#[derive(Clone, Debug)]
pub struct ConnectFourBoard {
    cells: [[Option<Player>; COLS]; ROWS],
    whose_turn: Player,
    ones: u8,
    twos: u8,
    last_move: Option<usize>,
}

impl ConnectFourBoard {
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
            whose_turn: Player::One,
            ones: 0,
            twos: 0,
            last_move: None,
        }
    }

    pub fn whose_turn(&self) -> Player {
        self.whose_turn
    }

    /// The column of the most recent [`add_piece`](Self::add_piece), if any.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    pub fn count_pieces(&self) -> u8 {
        self.ones + self.twos
    }

    pub fn is_full(&self) -> bool {
        self.count_pieces() as usize == ROWS * COLS
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[0][col].is_some()
    }

    /// Places a piece directly on a cell, ignoring gravity. Used by the
    /// position parser and the `connect_four_position!` macro; play goes
    /// through [`add_piece`](Self::add_piece). The turn is re-derived from
    /// the piece counts, player one moving first.
    pub fn put(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if row >= ROWS || col >= COLS {
            return Err(BoardError::CellOutOfBounds { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[row][col] = Some(player);
        match player {
            Player::One => self.ones += 1,
            Player::Two => self.twos += 1,
        }
        self.whose_turn = if self.ones == self.twos {
            Player::One
        } else {
            Player::Two
        };
        Ok(())
    }

    /// Drops the current player's piece into `col` and returns the
    /// resulting board with the turn flipped.
    pub fn add_piece(&self, col: usize) -> Result<Self, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfBounds { col });
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_none())
            .ok_or(BoardError::ColumnFull { col })?;

        let mut next = self.clone();
        next.cells[row][col] = Some(self.whose_turn);
        match self.whose_turn {
            Player::One => next.ones += 1,
            Player::Two => next.twos += 1,
        }
        next.whose_turn = self.whose_turn.opposite();
        next.last_move = Some(col);
        Ok(next)
    }

    /// Returns the player with four in a row, if either has one.
    pub fn winner(&self) -> Option<Player> {
        for window in WIN_WINDOWS.iter() {
            let (row, col) = window[0];
            if let Some(player) = self.cells[row][col] {
                if window[1..]
                    .iter()
                    .all(|&(row, col)| self.cells[row][col] == Some(player))
                {
                    return Some(player);
                }
            }
        }
        None
    }

    /// Every maximal run of `player`'s pieces in the four scan directions.
    /// A lone piece yields a length-one chain per direction it starts.
    pub fn chains(&self, player: Player) -> Vec<Chain> {
        let mut chains = Vec::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != Some(player) {
                    continue;
                }
                for &(d_row, d_col) in CHAIN_DIRECTIONS.iter() {
                    // Only start a chain where the run actually begins.
                    if self.occupied_by(row as isize - d_row, col as isize - d_col, player) {
                        continue;
                    }
                    let mut chain = Chain::new();
                    let (mut r, mut c) = (row as isize, col as isize);
                    while self.occupied_by(r, c, player) {
                        chain.push((r as usize, c as usize));
                        r += d_row;
                        c += d_col;
                    }
                    chains.push(chain);
                }
            }
        }
        chains
    }

    /// Length of `player`'s longest chain, or 0 with no pieces on board.
    pub fn longest_chain(&self, player: Player) -> usize {
        self.chains(player)
            .iter()
            .map(|chain| chain.len())
            .max()
            .unwrap_or(0)
    }

    fn occupied_by(&self, row: isize, col: isize, player: Player) -> bool {
        if row < 0 || col < 0 || row as usize >= ROWS || col as usize >= COLS {
            return false;
        }
        self.cells[row as usize][col as usize] == Some(player)
    }
}

impl Default for ConnectFourBoard {
    fn default() -> Self {
        Self::new()
    }
}

static POSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.XO]{7}(/[.XO]{7}){5}$").expect("position regex is valid"));

// used for parsing board diagrams from cli args
impl FromStr for ConnectFourBoard {
    type Err = BoardError;

    /// Parses a board from six `/`-separated rows of seven `X`, `O` or `.`
    /// characters, top row first. The turn is derived from the piece
    /// counts, player one (`X`) moving first.
    fn from_str(diagram: &str) -> Result<Self, Self::Err> {
        if !POSITION_RE.is_match(diagram) {
            return Err(BoardError::InvalidPosition(format!(
                "`{}` is not six '/'-separated rows of seven [.XO] cells",
                diagram
            )));
        }

        let mut board = ConnectFourBoard::new();
        for (row, row_str) in diagram.split('/').enumerate() {
            for (col, cell) in row_str.chars().enumerate() {
                let player = match cell {
                    'X' => Player::One,
                    'O' => Player::Two,
                    _ => continue,
                };
                board.put(row, col, player)?;
            }
        }

        if board.ones != board.twos && board.ones != board.twos + 1 {
            return Err(BoardError::InvalidPosition(format!(
                "{} X pieces against {} O pieces cannot arise from alternating play",
                board.ones, board.twos
            )));
        }
        Ok(board)
    }
}

impl fmt::Display for ConnectFourBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  1   2   3   4   5   6   7")?;
        writeln!(f, "┌───┬───┬───┬───┬───┬───┬───┐")?;
        for row in 0..ROWS {
            write!(f, "│")?;
            for col in 0..COLS {
                match self.cells[row][col] {
                    Some(player) => write!(f, " {} │", player)?,
                    None => write!(f, "   │")?,
                }
            }
            writeln!(f)?;
            if row + 1 < ROWS {
                writeln!(f, "├───┼───┼───┼───┼───┼───┼───┤")?;
            } else {
                writeln!(f, "└───┴───┴───┴───┴───┴───┴───┘")?;
            }
        }
        Ok(())
    }
}

/// Builds a [`ConnectFourBoard`] from a 6x7 grid of `X`, `O` and `.`
/// tokens, top row first. The turn is derived from the piece counts.
#[macro_export]
macro_rules! connect_four_position {
    ($($cell:tt)*) => {{
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert_eq!(
            cells.len(),
            42,
            "Invalid number of cells. Expected 42, got {}",
            cells.len()
        );
        let mut board = $crate::connect_four::ConnectFourBoard::new();
        for (i, &c) in cells.iter().enumerate() {
            let row = i / 7;
            let col = i % 7;
            match c {
                'X' => board
                    .put(row, col, $crate::connect_four::Player::One)
                    .expect("cell is empty"),
                'O' => board
                    .put(row, col, $crate::connect_four::Player::Two)
                    .expect("cell is empty"),
                '.' => {}
                _ => panic!("Invalid character in connect four position"),
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parsing() {
        assert_eq!(Player::One, Player::from_str("x").unwrap());
        assert_eq!(Player::Two, Player::from_str("o").unwrap());
        assert!(Player::ALL.contains(&Player::from_str("random").unwrap()));
        assert!(Player::from_str("yellow").is_err());
    }

    #[test]
    fn test_pieces_fall_to_the_bottom() {
        let board = ConnectFourBoard::new();
        let board = board.add_piece(3).unwrap();
        assert_eq!(Some(Player::One), board.get(5, 3));
        assert_eq!(Player::Two, board.whose_turn());
        assert_eq!(Some(3), board.last_move());

        let board = board.add_piece(3).unwrap();
        assert_eq!(Some(Player::Two), board.get(4, 3));
        assert_eq!(Player::One, board.whose_turn());
        assert_eq!(2, board.count_pieces());
    }

    #[test]
    fn test_full_column_rejects_pieces() {
        let mut board = ConnectFourBoard::new();
        for _ in 0..ROWS {
            board = board.add_piece(0).unwrap();
        }
        assert!(board.is_column_full(0));
        assert!(matches!(
            board.add_piece(0),
            Err(BoardError::ColumnFull { col: 0 })
        ));
        assert!(matches!(
            board.add_piece(9),
            Err(BoardError::ColumnOutOfBounds { col: 9 })
        ));
    }

    #[test]
    fn test_put_rejects_out_of_bounds_cells() {
        let mut board = ConnectFourBoard::new();
        // A bad row is reported as a cell fault, not blamed on the column.
        assert!(matches!(
            board.put(6, 3, Player::One),
            Err(BoardError::CellOutOfBounds { row: 6, col: 3 })
        ));
        assert!(matches!(
            board.put(0, 7, Player::One),
            Err(BoardError::CellOutOfBounds { row: 0, col: 7 })
        ));
        assert_eq!(0, board.count_pieces());

        board.put(5, 3, Player::One).unwrap();
        assert!(matches!(
            board.put(5, 3, Player::Two),
            Err(BoardError::CellOccupied { row: 5, col: 3 })
        ));
    }

    #[test]
    fn test_winner_in_all_directions() {
        let horizontal = connect_four_position! {
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . O O O . . .
            . X X X X . .
        };
        assert_eq!(Some(Player::One), horizontal.winner());

        let vertical = connect_four_position! {
            . . . . . . .
            . . O . . . .
            . . O . . . .
            . . O . . . .
            . . O . X . .
            . . X . X X .
        };
        assert_eq!(Some(Player::Two), vertical.winner());

        let diagonal = connect_four_position! {
            . . . . . . .
            . . . . . . .
            . . . X O . .
            . . X O O . .
            . X O X O . .
            X O X O X . .
        };
        assert_eq!(Some(Player::One), diagonal.winner());

        let nobody = connect_four_position! {
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . O O O . . .
            . X X X . . .
        };
        assert_eq!(None, nobody.winner());
    }

    #[test]
    fn test_chains_are_maximal_runs() {
        let board = connect_four_position! {
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . O . . . .
            . X X X O . .
        };
        // The horizontal X run comes back as a single maximal chain of
        // length 3, never as sub-runs. Each of the three pieces also
        // starts chains in the other three directions: 3 * 4 - 2
        // continuation cells = 10 chains in total.
        let chains = board.chains(Player::One);
        assert_eq!(10, chains.len());
        assert_eq!(1, chains.iter().filter(|chain| chain.len() == 3).count());
        assert!(chains.iter().all(|chain| chain.len() != 2));
        assert_eq!(3, board.longest_chain(Player::One));
        // The two O pieces are not adjacent in any direction.
        assert_eq!(1, board.longest_chain(Player::Two));
    }

    #[test]
    fn test_parse_round_trip() {
        let board: ConnectFourBoard = "......./......./......./......./...O.../..XX...".parse().unwrap();
        assert_eq!(Some(Player::One), board.get(5, 2));
        assert_eq!(Some(Player::Two), board.get(4, 3));
        assert_eq!(3, board.count_pieces());
        // Two X against one O: it is O's turn.
        assert_eq!(Player::Two, board.whose_turn());

        assert!("garbage".parse::<ConnectFourBoard>().is_err());
        // Three X against one O cannot arise from alternating play.
        assert!("......./......./......./......./....X../..XX..O"
            .parse::<ConnectFourBoard>()
            .is_err());
    }

    #[test]
    fn test_empty_position_constant_parses() {
        let board: ConnectFourBoard = EMPTY_POSITION.parse().unwrap();
        assert_eq!(0, board.count_pieces());
        assert_eq!(Player::One, board.whose_turn());
    }

    #[test]
    fn test_win_window_table_size() {
        assert_eq!(69, WIN_WINDOWS.len());
    }
}
