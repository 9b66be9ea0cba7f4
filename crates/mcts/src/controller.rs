//! Move choosers that can be seated at a game.
//!
//! - [`Mcts`] searches for its move
//! - [`RandomController`] picks uniformly among legal moves and serves as the
//!   baseline opponent when evaluating the engine

use crate::search::Mcts;
use playout_core::{Game, PlayoutError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Anything that can pick a move for the player to move.
pub trait Controller<G: Game> {
    /// Short label for logs and match summaries.
    fn name(&self) -> &'static str;

    /// Choose a move for `state`.
    ///
    /// # Errors
    /// Returns `PlayoutError::TerminalPosition` if the game is already over.
    fn next_move(&mut self, game: &G, state: &G::State) -> Result<G::Move>;
}

impl<G: Game, R: Rng> Controller<G> for Mcts<G, R> {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn next_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        self.get_next_move(game, state)
    }
}

/// Baseline controller: a uniformly random legal move.
pub struct RandomController<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: Game, R: Rng> Controller<G> for RandomController<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        if game.is_terminal(state) {
            return Err(PlayoutError::TerminalPosition);
        }
        game.legal_moves(state)
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayoutError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MctsConfig;
    use crate::games::{TicTacToe, TicTacToeMove};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_controller_plays_legal_moves() {
        let game = TicTacToe;
        let mut controller = RandomController::new(ChaCha8Rng::seed_from_u64(11));
        let mut state = game.initial_state();

        while !game.is_terminal(&state) {
            let mv = controller.next_move(&game, &state).unwrap();
            assert!(game.legal_moves(&state).contains(&mv));
            game.apply(&mut state, mv);
        }
    }

    #[test]
    fn test_controllers_reject_terminal_positions() {
        let game = TicTacToe;
        let mut state = game.initial_state();
        for cell in [0, 3, 1, 4, 2] {
            game.apply(&mut state, TicTacToeMove(cell));
        }

        let mut random = RandomController::new(ChaCha8Rng::seed_from_u64(0));
        let mut mcts: Mcts<TicTacToe, _> =
            Mcts::new(MctsConfig::with_iterations(10), ChaCha8Rng::seed_from_u64(0));

        assert_eq!(
            Controller::<TicTacToe>::next_move(&mut random, &game, &state),
            Err(PlayoutError::TerminalPosition)
        );
        assert_eq!(
            mcts.next_move(&game, &state),
            Err(PlayoutError::TerminalPosition)
        );
    }

    #[test]
    fn test_controllers_as_trait_objects() {
        let game = TicTacToe;
        let mut seats: Vec<Box<dyn Controller<TicTacToe>>> = vec![
            Box::new(Mcts::<TicTacToe, _>::new(
                MctsConfig::with_iterations(50),
                ChaCha8Rng::seed_from_u64(1),
            )),
            Box::new(RandomController::new(ChaCha8Rng::seed_from_u64(2))),
        ];
        assert_eq!(seats[0].name(), "mcts");
        assert_eq!(seats[1].name(), "random");

        let mut state = game.initial_state();
        let mut turn = 0;
        while !game.is_terminal(&state) {
            let mv = seats[turn % 2].next_move(&game, &state).unwrap();
            game.apply(&mut state, mv);
            turn += 1;
        }
        assert!(turn >= 5);
    }
}
