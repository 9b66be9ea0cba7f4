//! Bundled game rules.
//!
//! Both games only implement `playout_core::Game`; the engine has no
//! knowledge of them beyond that contract.

pub mod connect_four;
pub mod tictactoe;

pub use connect_four::{ConnectFour, ConnectFourMove, ConnectFourState};
pub use tictactoe::{TicTacToe, TicTacToeMove, TicTacToeState};
