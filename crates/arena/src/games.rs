//! Games the arena can seat, and how their moves are typed on the command line.

use clap::ValueEnum;
use playout_core::Game;
use playout_mcts::games::{ConnectFour, ConnectFourMove, TicTacToe, TicTacToeMove};

/// Game selected with `--game`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
}

/// A game the arena knows how to name and read moves for.
pub trait ArenaGame: Game {
    /// Name used in logs and match summaries.
    const NAME: &'static str;

    /// Parse one move token as typed by the user. Legality is checked
    /// separately against the position.
    fn parse_move(&self, token: &str) -> Option<Self::Move>;
}

impl ArenaGame for TicTacToe {
    const NAME: &'static str = "tic-tac-toe";

    fn parse_move(&self, token: &str) -> Option<Self::Move> {
        token.trim().parse().ok().map(TicTacToeMove)
    }
}

impl ArenaGame for ConnectFour {
    const NAME: &'static str = "connect-four";

    fn parse_move(&self, token: &str) -> Option<Self::Move> {
        token.trim().parse().ok().map(ConnectFourMove)
    }
}
