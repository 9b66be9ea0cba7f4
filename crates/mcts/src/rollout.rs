//! Random playouts.
//!
//! A rollout plays uniformly random legal moves on a private copy of a
//! position until the game is decided or a step cap is hit. It never touches
//! the search tree.

use playout_core::{Game, Outcome};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Result of one random playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rollout {
    /// Decided outcome, or `Draw` when the playout was cut short.
    pub outcome: Outcome,

    /// Moves played during the playout.
    pub steps: usize,

    /// True if the playout stopped before the game was decided.
    pub truncated: bool,
}

/// Play random moves from `position` until the game is decided.
///
/// After `max_steps` moves without a decision the playout is scored as a
/// draw. Deep or cyclic games therefore degrade to a draw estimate instead of
/// stalling the search.
pub fn simulate<G, R>(game: &G, position: &G::State, max_steps: usize, rng: &mut R) -> Rollout
where
    G: Game,
    R: Rng + ?Sized,
{
    let mut state = position.clone();
    let mut steps = 0;

    loop {
        let outcome = game.outcome(&state);
        if outcome.is_decided() {
            return Rollout {
                outcome,
                steps,
                truncated: false,
            };
        }

        if steps >= max_steps {
            return Rollout {
                outcome: Outcome::Draw,
                steps,
                truncated: true,
            };
        }

        let moves = game.legal_moves(&state);
        let Some(&mv) = moves.choose(rng) else {
            warn!(steps, "undecided position offers no legal moves, scoring rollout as a draw");
            return Rollout {
                outcome: Outcome::Draw,
                steps,
                truncated: true,
            };
        };

        game.apply(&mut state, mv);
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{TicTacToe, TicTacToeMove};
    use playout_core::Player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // Players alternately move a counter forever; nobody ever wins.
    #[derive(Clone)]
    struct EndlessGame;

    impl Game for EndlessGame {
        type State = u64;
        type Move = u8;

        fn initial_state(&self) -> Self::State {
            0
        }

        fn legal_moves(&self, _state: &Self::State) -> Vec<Self::Move> {
            vec![1, 2]
        }

        fn apply(&self, state: &mut Self::State, mv: Self::Move) {
            *state += mv as u64;
        }

        fn next_player(&self, _state: &Self::State) -> Player {
            Player::First
        }

        fn outcome(&self, _state: &Self::State) -> Outcome {
            Outcome::Undecided
        }
    }

    // Undecided but stuck: a broken rules implementation.
    #[derive(Clone)]
    struct StuckGame;

    impl Game for StuckGame {
        type State = ();
        type Move = u8;

        fn initial_state(&self) -> Self::State {}

        fn legal_moves(&self, _state: &Self::State) -> Vec<Self::Move> {
            Vec::new()
        }

        fn apply(&self, _state: &mut Self::State, _mv: Self::Move) {}

        fn next_player(&self, _state: &Self::State) -> Player {
            Player::Second
        }

        fn outcome(&self, _state: &Self::State) -> Outcome {
            Outcome::Undecided
        }
    }

    #[test]
    fn test_endless_game_is_cut_at_the_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rollout = simulate(&EndlessGame, &0, 1000, &mut rng);

        assert_eq!(rollout.outcome, Outcome::Draw);
        assert_eq!(rollout.steps, 1000);
        assert!(rollout.truncated);
    }

    #[test]
    fn test_custom_cap_is_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rollout = simulate(&EndlessGame, &0, 3, &mut rng);
        assert_eq!(rollout.steps, 3);
        assert!(rollout.truncated);
    }

    #[test]
    fn test_stuck_game_scores_as_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rollout = simulate(&StuckGame, &(), 10, &mut rng);
        assert_eq!(rollout.outcome, Outcome::Draw);
        assert_eq!(rollout.steps, 0);
        assert!(rollout.truncated);
    }

    #[test]
    fn test_terminal_position_returns_immediately() {
        let game = TicTacToe;
        let mut state = game.initial_state();
        for cell in [0, 3, 1, 4, 2] {
            game.apply(&mut state, TicTacToeMove(cell));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let rollout = simulate(&game, &state, 1000, &mut rng);
        assert_eq!(rollout.outcome, Outcome::Win(Player::First));
        assert_eq!(rollout.steps, 0);
        assert!(!rollout.truncated);
    }

    #[test]
    fn test_rollout_reaches_a_decided_outcome_without_touching_input() {
        let game = TicTacToe;
        let state = game.initial_state();

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let rollout = simulate(&game, &state, 1000, &mut rng);
            assert!(rollout.outcome.is_decided());
            assert!(!rollout.truncated);
            assert!((5..=9).contains(&rollout.steps));
        }
        assert_eq!(state, game.initial_state());
    }

    #[test]
    fn test_rollout_is_deterministic_for_a_seed() {
        let game = TicTacToe;
        let state = game.initial_state();
        let run = |seed| simulate(&game, &state, 1000, &mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(run(99), run(99));
    }
}
