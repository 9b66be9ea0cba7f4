//! Tic-tac-toe implementation for MCTS validation.
//!
//! Tic-tac-toe is a solved game where perfect play always results in a draw.
//! This makes it ideal for validating MCTS correctness:
//! - MCTS should not lose against a random opponent
//! - MCTS should take immediate wins and block immediate losses

use playout_core::{Game, Outcome, Player};
use std::fmt;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Tic-tac-toe board state.
///
/// `Player::First` plays X, `Player::Second` plays O.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    /// Board: 9 cells, indexed 0-8 (row-major).
    /// ```text
    /// 0 | 1 | 2
    /// ---------
    /// 3 | 4 | 5
    /// ---------
    /// 6 | 7 | 8
    /// ```
    board: [Option<Player>; 9],

    /// Current player to move.
    current: Player,

    /// Cached winner (if any).
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::First,
            winner: None,
        }
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the piece at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.board.get(cell).copied().flatten()
    }

    /// The three-in-a-row held by the winner, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.into_iter().find(|line| {
            self.board[line[0]].is_some()
                && self.board[line[0]] == self.board[line[1]]
                && self.board[line[1]] == self.board[line[2]]
        })
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.board[row * 3 + col] {
                    Some(Player::First) => write!(f, "X")?,
                    Some(Player::Second) => write!(f, "O")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe move (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub u8);

impl TicTacToeMove {
    /// Get the row (0-2).
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tic-tac-toe game implementation.
#[derive(Clone, Debug)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Move = TicTacToeMove;

    fn initial_state(&self) -> Self::State {
        TicTacToeState::new()
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        if state.winner.is_some() {
            return Vec::new();
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| TicTacToeMove(i as u8))
            .collect()
    }

    fn apply(&self, state: &mut Self::State, mv: Self::Move) {
        let cell = mv.0 as usize;
        assert!(
            cell < 9 && state.board[cell].is_none(),
            "illegal tic-tac-toe move {}",
            mv
        );
        state.board[cell] = Some(state.current);
        state.current = state.current.opponent();
        if state.winner.is_none() {
            state.winner = state.winning_line().and_then(|line| state.board[line[0]]);
        }
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
