//! Connect Four on the standard 7-column, 6-row board.
//!
//! Players drop discs into columns; a disc falls to the lowest empty row.
//! Four in a row horizontally, vertically or diagonally wins.
//!
//! The board is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```

use playout_core::{Game, Outcome, Player};
use std::fmt;

/// Board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const BOARD_SIZE: usize = COLS * ROWS;

/// Connect Four position.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ConnectFourState {
    board: [Option<Player>; BOARD_SIZE],
    /// Number of discs in each column.
    heights: [u8; COLS],
    current: Player,
    winner: Option<Player>,
}

impl ConnectFourState {
    /// Empty board, first player to move.
    pub fn new() -> Self {
        Self {
            board: [None; BOARD_SIZE],
            heights: [0; COLS],
            current: Player::First,
            winner: None,
        }
    }

    /// Convert column and row to board index
    #[inline]
    fn pos(col: usize, row: usize) -> usize {
        row * COLS + col
    }

    /// Disc at (col, row), row 0 being the bottom.
    pub fn get(&self, col: usize, row: usize) -> Option<Player> {
        if col < COLS && row < ROWS {
            self.board[Self::pos(col, row)]
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col] as usize
    }

    fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize >= ROWS)
    }

    /// Does the disc at (col, row) complete a line of four?
    fn wins_at(&self, col: usize, row: usize) -> bool {
        let Some(player) = self.get(col, row) else {
            return false;
        };

        // Direction vectors: horizontal, vertical, diagonal /, diagonal \
        const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        DIRECTIONS.iter().any(|&(dc, dr)| {
            let run = |sign: i32| {
                let mut count = 0;
                let (mut c, mut r) = (col as i32 + sign * dc, row as i32 + sign * dr);
                while c >= 0
                    && c < COLS as i32
                    && r >= 0
                    && r < ROWS as i32
                    && self.board[Self::pos(c as usize, r as usize)] == Some(player)
                {
                    count += 1;
                    c += sign * dc;
                    r += sign * dr;
                }
                count
            };
            1 + run(1) + run(-1) >= 4
        })
    }
}

impl Default for ConnectFourState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectFourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.board[Self::pos(col, row)] {
                    Some(Player::First) => write!(f, "X")?,
                    Some(Player::Second) => write!(f, "O")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "0 1 2 3 4 5 6")
    }
}

/// Drop a disc in a column (0-6).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ConnectFourMove(pub u8);

impl fmt::Display for ConnectFourMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connect Four game implementation.
#[derive(Clone, Debug)]
pub struct ConnectFour;

impl Game for ConnectFour {
    type State = ConnectFourState;
    type Move = ConnectFourMove;

    fn initial_state(&self) -> Self::State {
        ConnectFourState::new()
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        if state.winner.is_some() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| (state.heights[col] as usize) < ROWS)
            .map(|col| ConnectFourMove(col as u8))
            .collect()
    }

    fn apply(&self, state: &mut Self::State, mv: Self::Move) {
        let col = mv.0 as usize;
        assert!(
            col < COLS && (state.heights[col] as usize) < ROWS,
            "illegal connect-four move {}",
            mv
        );

        let row = state.heights[col] as usize;
        state.board[ConnectFourState::pos(col, row)] = Some(state.current);
        state.heights[col] += 1;
        if state.winner.is_none() && state.wins_at(col, row) {
            state.winner = Some(state.current);
        }
        state.current = state.current.opponent();
    }

    fn next_player(&self, state: &Self::State) -> Player {
        state.current
    }

    fn outcome(&self, state: &Self::State) -> Outcome {
        if let Some(winner) = state.winner {
            Outcome::Win(winner)
        } else if state.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }
}
