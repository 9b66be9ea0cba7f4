//! Arena-allocated search tree.
//!
//! Using a Vec<SearchNode> with indices provides better cache locality
//! and simpler ownership compared to Rc<RefCell<Node>>. Children are owned by
//! the arena and listed by handle in their parent; the parent handle stored
//! in each child is only used to walk upwards during backpropagation.

use crate::node::{NodeId, SearchNode};
use crate::trace::NodeTrace;
use playout_core::{Game, Outcome};
use std::fmt::Debug;

/// Arena-allocated search tree for one search.
///
/// Nodes are stored in a contiguous vector and referenced by index. They are
/// never moved or removed; the whole arena is dropped with the tree.
#[derive(Clone, Debug)]
pub struct Tree<S, M> {
    nodes: Vec<SearchNode<S, M>>,
}

impl<S: Clone, M: Copy + Eq + Debug> Tree<S, M> {
    /// Create a tree holding only a root for `position`.
    pub fn new<G>(game: &G, position: S) -> Self
    where
        G: Game<State = S, Move = M>,
    {
        Self {
            nodes: vec![SearchNode::new(game, position, None, None)],
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &SearchNode<S, M> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S, M> {
        &mut self.nodes[id.0]
    }

    /// Get the root node.
    pub fn root(&self) -> &SearchNode<S, M> {
        self.get(NodeId::ROOT)
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every node in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S, M>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Expand `mv` from `parent` into a new child and return its ID.
    ///
    /// The move is removed from the parent's untried moves, a clone of the
    /// parent's position has the move applied, and the child is appended to
    /// the parent's children. This is the only way the tree grows.
    ///
    /// # Panics
    /// Panics if `mv` is not one of the parent's untried moves.
    pub fn expand_move<G>(&mut self, game: &G, parent: NodeId, mv: M) -> NodeId
    where
        G: Game<State = S, Move = M>,
    {
        let node = self.get_mut(parent);
        let slot = node
            .untried_moves
            .iter()
            .position(|untried| *untried == mv)
            .unwrap_or_else(|| panic!("move {:?} is not untried at node {}", mv, parent.0));
        node.untried_moves.remove(slot);

        let mut position = node.position.clone();
        game.apply(&mut position, mv);

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(SearchNode::new(game, position, Some(parent), Some(mv)));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Backpropagate `outcome` from `node` up to the root inclusive.
    ///
    /// Every node on the path gets one more visit and the credit the outcome
    /// is worth to the player who moved into it.
    pub fn update(&mut self, node: NodeId, outcome: Outcome) {
        let mut current = Some(node);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.record(outcome);
            current = node.parent;
        }
    }

    /// The root child with the most visits, first expanded on ties.
    pub fn most_visited_child(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child in self.root().children() {
            let visits = self.get(child).visits;
            if best.map_or(true, |(_, best_visits)| visits > best_visits) {
                best = Some((child, visits));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Printable debug view of one node.
    pub fn trace(&self, id: NodeId) -> NodeTrace<'_, S, M> {
        NodeTrace::new(self, id)
    }

    /// Depth of `id` below the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).parent;
        }
        depth
    }
}
