//! Tree policy: UCB1 child selection.
//!
//! ```text
//! UCB(child) = score / visits + C * sqrt(2 * ln(parent_visits) / visits)
//! ```
//!
//! A child's score is credit for the player who moved into it, which is the
//! parent's player to move, so every parent simply maximizes.

use crate::node::{NodeId, SearchNode};
use crate::tree::Tree;
use std::fmt::Debug;

/// UCB1 value of `child` under a parent visited `parent_visits` times.
///
/// Both visit counts must be non-zero.
pub fn ucb<S, M>(child: &SearchNode<S, M>, parent_visits: u32, exploration: f64) -> f64 {
    let visits = child.visits() as f64;
    let exploitation = child.score() / visits;
    let exploration_term = (2.0 * (parent_visits as f64).ln() / visits).sqrt();
    exploitation + exploration * exploration_term
}

/// Return the child of `node_id` with the highest UCB1 value.
///
/// Ties go to the child expanded first, so selection is deterministic for a
/// given tree.
///
/// # Panics
/// Panics if the node has no children. Must only be called on a visited node
/// whose children have all been visited at least once.
pub fn select_child_ucb<S, M>(tree: &Tree<S, M>, node_id: NodeId, exploration: f64) -> NodeId
where
    S: Clone,
    M: Copy + Eq + Debug,
{
    let node = tree.get(node_id);
    debug_assert!(node.visits() > 0, "UCB selection on an unvisited node");

    let mut best: Option<(NodeId, f64)> = None;
    for &child_id in node.children() {
        let child = tree.get(child_id);
        debug_assert!(child.visits() > 0, "UCB selection with an unvisited child");

        let value = ucb(child, node.visits(), exploration);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((child_id, value));
        }
    }

    // INVARIANT: only called on nodes with children
    best.map(|(id, _)| id)
        .expect("BUG: select_child_ucb called on node without children")
}

/// Descend from the root while the current node is fully expanded and has
/// children.
///
/// Stops at the first node that still has an untried move, or at a leaf with
/// neither untried moves nor children (a terminal position).
pub fn select<S, M>(tree: &Tree<S, M>, exploration: f64) -> NodeId
where
    S: Clone,
    M: Copy + Eq + Debug,
{
    let mut current = NodeId::ROOT;
    loop {
        let node = tree.get(current);
        if !node.is_fully_expanded() || node.children().is_empty() {
            return current;
        }
        current = select_child_ucb(tree, current, exploration);
    }
}
