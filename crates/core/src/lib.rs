//! Playout Core - Game rules contract and common types
//!
//! This crate provides the [`Game`] trait that any game must implement to be
//! searched by the playout engine, plus the types shared across crates.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Player`] - One of the two players
//! - [`Outcome`] - Undecided, win for a player, or draw

mod error;
mod game;
mod types;

pub use error::{PlayoutError, Result};
pub use game::Game;
pub use types::{Outcome, Player, DRAW_CREDIT};
