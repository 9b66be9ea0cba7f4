//! MCTS node types for tree storage.
//!
//! Uses arena allocation with indices so that children can point back at
//! their parent without shared ownership.

use playout_core::{Game, Outcome, Player};

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
/// Using indices instead of pointers avoids Rc/RefCell overhead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the search tree.
///
/// Each node owns one game position, the legal moves from it that have not
/// been expanded yet, and the statistics gathered by backpropagation.
#[derive(Clone, Debug)]
pub struct SearchNode<S, M> {
    pub(crate) position: S,

    /// Parent handle (None for root). Non-owning: the parent owns the child.
    pub(crate) parent: Option<NodeId>,

    /// Move that led to this node (None for root).
    pub(crate) incoming_move: Option<M>,

    /// `next_player(position)`, fixed when the node is built.
    pub(crate) player_to_move: Player,

    /// Legal moves not expanded into children yet. Only ever shrinks.
    pub(crate) untried_moves: Vec<M>,

    /// Children in expansion order.
    pub(crate) children: Vec<NodeId>,

    /// Number of simulations that passed through this node.
    pub(crate) visits: u32,

    /// Accumulated credit for the player who moved into this node.
    pub(crate) score: f64,
}

impl<S, M> SearchNode<S, M> {
    /// Build an unvisited node for `position`.
    ///
    /// A decided position gets no untried moves, whatever the rules list as
    /// legal, so it is always a leaf.
    pub(crate) fn new<G>(
        game: &G,
        position: S,
        parent: Option<NodeId>,
        incoming_move: Option<M>,
    ) -> Self
    where
        G: Game<State = S, Move = M>,
    {
        let untried_moves = if game.is_terminal(&position) {
            Vec::new()
        } else {
            game.legal_moves(&position)
        };

        Self {
            player_to_move: game.next_player(&position),
            position,
            parent,
            incoming_move,
            untried_moves,
            children: Vec::new(),
            visits: 0,
            score: 0.0,
        }
    }

    /// The game position this node represents.
    pub fn position(&self) -> &S {
        &self.position
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn incoming_move(&self) -> Option<&M> {
        self.incoming_move.as_ref()
    }

    /// The player whose turn it is at this node.
    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn untried_moves(&self) -> &[M] {
        &self.untried_moves
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// No moves left to expand.
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    /// Fully expanded with no children: a terminal position.
    pub fn is_leaf(&self) -> bool {
        self.untried_moves.is_empty() && self.children.is_empty()
    }

    /// Mean credit per visit. Returns 0.0 if the node has never been visited.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }

    /// Credit this node earns from `outcome`, judged by its own player to move.
    pub fn get_score(&self, outcome: Outcome) -> f64 {
        outcome.credit_for(self.player_to_move)
    }

    /// Count one simulation through this node.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.visits += 1;
        self.score += self.get_score(outcome);
    }
}
