use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{Outcome, Player};

/// The rules of a deterministic, perfect-information, two-player game.
///
/// This is the whole surface the search engine sees. Implementations must not
/// depend on the engine, and the engine never special-cases an implementation.
pub trait Game: Clone + Send + Sync {
    /// A game position (e.g. a tic-tac-toe board plus the side to move).
    type State: Clone + Send;

    /// A move, meaningful only relative to the position that produced it.
    type Move: Copy + Eq + Hash + Send + Debug;

    /// Returns the starting position.
    fn initial_state(&self) -> Self::State;

    /// Returns every legal move from `state`, without duplicates.
    ///
    /// The order carries no meaning but must be the same every time the same
    /// position is queried, so seeded searches stay reproducible.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Plays `mv` on `state` in place.
    ///
    /// # Panics
    /// May panic if `mv` was not returned by [`Game::legal_moves`] for `state`.
    fn apply(&self, state: &mut Self::State, mv: Self::Move);

    /// Returns the player whose turn it is in `state`.
    fn next_player(&self, state: &Self::State) -> Player;

    /// Returns the result of the game at `state`.
    fn outcome(&self, state: &Self::State) -> Outcome;

    /// Returns true once the game at `state` is decided.
    ///
    /// Terminality comes from [`Game::outcome`], never from an empty move list.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.outcome(state).is_decided()
    }
}
