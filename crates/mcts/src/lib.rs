//! Monte Carlo Tree Search for two-player, perfect-information games.
//!
//! This crate provides a generic UCT implementation that can be used with
//! any game implementing the `playout_core::Game` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any `Game` implementation
//! - **UCB1 Selection**: Descends fully expanded levels with the UCB1 rule
//! - **Random Rollouts**: Uniform playouts with a step cap
//! - **Perspective Scoring**: Each node is credited from its own mover's view
//! - **Anytime**: Runs under a wall-clock or fixed-iteration budget
//!
//! # Example
//!
//! ```
//! use playout_core::Game;
//! use playout_mcts::{games::TicTacToe, Mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let game = TicTacToe;
//! let state = game.initial_state();
//!
//! let config = MctsConfig::with_iterations(500);
//! let mut mcts = Mcts::new(config, ChaCha8Rng::seed_from_u64(42));
//!
//! let result = mcts.search(&game, &state).expect("empty board is searchable");
//! println!("Best move: {}", result.best_move);
//! println!("Win rate: {:.3}", result.win_rate);
//! ```

pub mod config;
pub mod controller;
pub mod games;
mod node;
pub mod rollout;
pub mod search;
pub mod selection;
mod trace;
mod tree;

pub use config::{MctsConfig, SearchBudget};
pub use controller::{Controller, RandomController};
pub use node::{NodeId, SearchNode};
pub use rollout::{simulate, Rollout};
pub use search::{Mcts, SearchResult};
pub use trace::NodeTrace;
pub use tree::Tree;
