//! Search behaviour on small synthetic games and on Connect Four.
//!
//! The synthetic games pin down perspective scoring exactly: their outcomes
//! do not depend on the rollout, so every statistic is known in advance.

use playout_core::{Game, Outcome, Player};
use playout_mcts::games::{ConnectFour, ConnectFourMove, ConnectFourState};
use playout_mcts::{Mcts, MctsConfig, NodeId, Tree};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Player 0 makes one forced move, player 1 replies with one forced move,
/// and player 0 is then declared the winner.
#[derive(Clone)]
struct ForcedWin;

impl Game for ForcedWin {
    type State = (u8, Player);
    type Move = u8;

    fn initial_state(&self) -> Self::State {
        (0, Player::First)
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        if state.0 < 2 {
            vec![state.0]
        } else {
            Vec::new()
        }
    }

    fn apply(&self, state: &mut Self::State, mv: Self::Move) {
        assert_eq!(mv, state.0, "illegal forced move {}", mv);
        state.0 += 1;
        state.1 = state.1.opponent();
    }

    fn next_player(&self, state: &Self::State) -> Player {
        state.1
    }

    fn outcome(&self, state: &Self::State) -> Outcome {
        if state.0 >= 2 {
            Outcome::Win(Player::First)
        } else {
            Outcome::Undecided
        }
    }
}

/// A game that never ends: each move just bumps a counter.
#[derive(Clone)]
struct Treadmill;

impl Game for Treadmill {
    type State = u32;
    type Move = bool;

    fn initial_state(&self) -> Self::State {
        0
    }

    fn legal_moves(&self, _state: &Self::State) -> Vec<Self::Move> {
        vec![false, true]
    }

    fn apply(&self, state: &mut Self::State, _mv: Self::Move) {
        *state += 1;
    }

    fn next_player(&self, state: &Self::State) -> Player {
        if *state % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    fn outcome(&self, _state: &Self::State) -> Outcome {
        Outcome::Undecided
    }
}

fn create_mcts<G: Game>(seed: u64, iterations: usize) -> Mcts<G, ChaCha8Rng> {
    Mcts::new(
        MctsConfig::with_iterations(iterations),
        ChaCha8Rng::seed_from_u64(seed),
    )
}

#[test]
fn test_credit_follows_each_nodes_mover() {
    let game = ForcedWin;
    let mut tree: Tree<(u8, Player), u8> = Tree::new(&game, game.initial_state());
    let first = tree.expand_move(&game, NodeId::ROOT, 0);
    let second = tree.expand_move(&game, first, 1);

    let outcome = game.outcome(tree.get(second).position());
    assert_eq!(outcome, Outcome::Win(Player::First));

    // Player 0 is to move at the terminal node: its own win earns that node
    // nothing, since player 1 made the move into it.
    assert_eq!(tree.get(second).get_score(outcome), 0.0);
    // Player 1 is to move at the middle node, reached by player 0's move.
    assert_eq!(tree.get(first).get_score(outcome), 1.0);
    assert_eq!(tree.root().get_score(outcome), 0.0);
    assert_eq!(tree.get(first).get_score(Outcome::Draw), 0.5);

    tree.update(second, outcome);
    assert_eq!(tree.get(second).score(), 0.0);
    assert_eq!(tree.get(first).score(), 1.0);
    assert_eq!(tree.root().score(), 0.0);
    assert!(tree.iter().all(|(_, node)| node.visits() == 1));
}

#[test]
fn test_forced_win_search_statistics() {
    let game = ForcedWin;
    let mut mcts = create_mcts(9, 40);

    let result = mcts.search(&game, &game.initial_state()).unwrap();
    assert_eq!(result.best_move, 0);
    assert_eq!(result.visit_counts, vec![(0, 40)]);
    // Every playout through the only root move ends in player 0's win.
    assert_eq!(result.win_rate, 1.0);

    let tree = mcts.tree().unwrap();
    assert_eq!(tree.len(), 3);
    let leaf = tree
        .iter()
        .find(|(_, node)| node.is_leaf())
        .map(|(id, _)| id)
        .unwrap();
    assert_eq!(tree.get(leaf).visits(), 39);
    assert_eq!(tree.get(leaf).win_rate(), 0.0);
    assert_eq!(tree.root().visits(), 40);
}

#[test]
fn test_endless_game_scores_draws() {
    let game = Treadmill;
    let mut mcts: Mcts<Treadmill, _> = Mcts::new(
        MctsConfig {
            max_rollout_steps: 12,
            ..MctsConfig::with_iterations(60)
        },
        ChaCha8Rng::seed_from_u64(4),
    );

    let result = mcts.search(&game, &game.initial_state()).unwrap();
    assert_eq!(result.iterations, 60);
    assert_eq!(result.truncated_rollouts, 60);
    assert_eq!(result.win_rate, 0.5);

    let tree = mcts.tree().unwrap();
    for (_, node) in tree.iter() {
        assert_eq!(node.score(), 0.5 * node.visits() as f64);
    }
}

fn connect_four(columns: &[u8]) -> ConnectFourState {
    let game = ConnectFour;
    let mut state = game.initial_state();
    for &col in columns {
        game.apply(&mut state, ConnectFourMove(col));
    }
    state
}

#[test]
fn test_connect_four_takes_vertical_win() {
    let game = ConnectFour;
    let mut mcts = create_mcts(21, 2000);

    // Both players have three stacked; first player to move completes column 0.
    let state = connect_four(&[0, 1, 0, 1, 0, 1]);

    let best = mcts.get_next_move(&game, &state).unwrap();
    assert_eq!(best, ConnectFourMove(0));
}

#[test]
fn test_connect_four_blocks_vertical_threat() {
    let game = ConnectFour;
    let mut mcts = create_mcts(22, 4000);

    // First player threatens column 0; second player must cap it.
    let state = connect_four(&[0, 1, 0, 1, 0]);
    assert_eq!(game.next_player(&state), Player::Second);

    let best = mcts.get_next_move(&game, &state).unwrap();
    assert_eq!(best, ConnectFourMove(0));
}
