//! Monte Carlo Tree Search implementation.
//!
//! Implements UCT: UCB1 selection, single-node expansion, uniformly random
//! rollouts and perspective-scored backpropagation, repeated until a time or
//! iteration budget is spent.

use crate::{
    config::{MctsConfig, SearchBudget},
    node::NodeId,
    rollout,
    selection,
    tree::Tree,
};
use playout_core::{Game, PlayoutError, Result};
use rand::Rng;
use std::hash::Hash;
use std::marker::PhantomData;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Result of an MCTS search.
#[derive(Clone, Debug)]
pub struct SearchResult<M: Clone + Copy + Eq + Hash> {
    /// Most visited root child's move.
    pub best_move: M,

    /// Visit count for each expanded root move, in expansion order.
    pub visit_counts: Vec<(M, u32)>,

    /// Mean credit of `best_move` for the player to move, in [0, 1].
    pub win_rate: f64,

    /// Completed select/expand/simulate/update cycles.
    pub iterations: usize,

    /// Rollouts that hit the step cap and were scored as draws.
    pub truncated_rollouts: usize,

    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl<M: Clone + Copy + Eq + Hash> SearchResult<M> {
    /// Get the best move (most visited).
    pub fn best(&self) -> M {
        self.best_move
    }

    /// Total visits over the root's children.
    pub fn total_visits(&self) -> u32 {
        self.visit_counts.iter().map(|(_, count)| *count).sum()
    }
}

/// Monte Carlo Tree Search with UCB1 selection and random rollouts.
///
/// Generic over:
/// - `G`: The game being played
/// - `R`: The random number generator, the only source of randomness
///
/// Every search builds a fresh tree. The last tree is kept for inspection
/// until the next search replaces it.
pub struct Mcts<G: Game, R: Rng> {
    config: MctsConfig,
    rng: R,
    tree: Option<Tree<G::State, G::Move>>,
    _game: PhantomData<G>,
}

impl<G, R> Mcts<G, R>
where
    G: Game,
    R: Rng,
{
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            tree: None,
            _game: PhantomData,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Tree built by the most recent search, if any.
    pub fn tree(&self) -> Option<&Tree<G::State, G::Move>> {
        self.tree.as_ref()
    }

    /// Search from `state` and return the most visited root move.
    ///
    /// # Errors
    /// See [`Mcts::search`].
    pub fn get_next_move(&mut self, game: &G, state: &G::State) -> Result<G::Move> {
        Ok(self.search(game, state)?.best_move)
    }

    /// Run MCTS from the given state, returning search results.
    ///
    /// # Errors
    /// - `PlayoutError::InvalidConfig` if the configuration does not validate
    /// - `PlayoutError::TerminalPosition` if `state` is already decided
    /// - `PlayoutError::NoLegalMoves` if `state` is undecided but has no moves
    pub fn search(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G::Move>> {
        self.config.validate()?;

        if game.is_terminal(state) {
            return Err(PlayoutError::TerminalPosition);
        }
        if game.legal_moves(state).is_empty() {
            return Err(PlayoutError::NoLegalMoves);
        }

        let mut tree = Tree::new(game, state.clone());
        let mut iterations = 0;
        let mut truncated_rollouts = 0;

        let start = Instant::now();
        // Checked after each cycle: every search expands at least one root child.
        loop {
            if self.run_cycle(game, &mut tree) {
                truncated_rollouts += 1;
            }
            iterations += 1;

            let spent = match self.config.budget {
                SearchBudget::Time(budget) => start.elapsed() >= budget,
                SearchBudget::Iterations(limit) => iterations >= limit,
            };
            if spent {
                break;
            }
        }
        let elapsed = start.elapsed();

        let result = Self::extract_results(&tree, iterations, truncated_rollouts, elapsed);
        debug!(
            iterations,
            truncated_rollouts,
            nodes = tree.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            best_move = ?result.best_move,
            win_rate = result.win_rate,
            "MCTS search complete"
        );

        self.tree = Some(tree);
        Ok(result)
    }

    /// Run one select -> expand -> simulate -> update cycle.
    ///
    /// Returns true if the rollout was truncated.
    fn run_cycle(&mut self, game: &G, tree: &mut Tree<G::State, G::Move>) -> bool {
        // SELECT: descend fully expanded levels by UCB1
        let mut node = selection::select(tree, self.config.exploration_constant);

        // EXPAND: grow one child if the selected node still has untried moves
        if !tree.get(node).is_fully_expanded() {
            node = self.expand(game, tree, node);
        }

        // SIMULATE: random playout from the new (or terminal) node
        let rollout = rollout::simulate(
            game,
            tree.get(node).position(),
            self.config.max_rollout_steps,
            &mut self.rng,
        );

        // UPDATE: credit every node on the path to the root
        tree.update(node, rollout.outcome);

        trace!(
            node = node.index(),
            depth = tree.depth(node),
            steps = rollout.steps,
            outcome = %rollout.outcome,
            "MCTS cycle complete"
        );

        rollout.truncated
    }

    /// Expand one untried move of `node_id`, chosen uniformly at random.
    fn expand(
        &mut self,
        game: &G,
        tree: &mut Tree<G::State, G::Move>,
        node_id: NodeId,
    ) -> NodeId {
        let untried = tree.get(node_id).untried_moves();
        debug_assert!(!untried.is_empty(), "expand called on a fully expanded node");
        let mv = untried[self.rng.gen_range(0..untried.len())];
        tree.expand_move(game, node_id, mv)
    }

    /// Extract search results from the root node.
    fn extract_results(
        tree: &Tree<G::State, G::Move>,
        iterations: usize,
        truncated_rollouts: usize,
        elapsed: Duration,
    ) -> SearchResult<G::Move> {
        let visit_counts: Vec<(G::Move, u32)> = tree
            .root()
            .children()
            .iter()
            .filter_map(|&id| {
                let child = tree.get(id);
                child.incoming_move().map(|mv| (*mv, child.visits()))
            })
            .collect();

        // INVARIANT: the first cycle always expands a root child
        let best_id = tree
            .most_visited_child()
            .expect("BUG: search finished without expanding the root");
        let best = tree.get(best_id);
        let best_move = *best
            .incoming_move()
            .expect("BUG: non-root node without an incoming move");

        SearchResult {
            best_move,
            visit_counts,
            win_rate: best.win_rate(),
            iterations,
            truncated_rollouts,
            elapsed,
        }
    }
}
