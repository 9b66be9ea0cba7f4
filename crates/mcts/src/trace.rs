//! Text dump of search nodes for debugging and regression tests.
//!
//! ```text
//! ROOT
//! Score ratio: 3.5 / 7
//! Untried moves: [0, 2]
//! Children's moves: [4, 1]
//! State:
//! . . .
//! . X .
//! . . .
//! ```

use crate::node::NodeId;
use crate::tree::Tree;
use std::fmt;

/// Borrowed view of one tree node that renders through `Display`.
pub struct NodeTrace<'a, S, M> {
    tree: &'a Tree<S, M>,
    id: NodeId,
}

impl<'a, S, M> NodeTrace<'a, S, M> {
    pub(crate) fn new(tree: &'a Tree<S, M>, id: NodeId) -> Self {
        Self { tree, id }
    }
}

fn write_moves<'m, M, I>(f: &mut fmt::Formatter<'_>, moves: I) -> fmt::Result
where
    M: fmt::Display + 'm,
    I: IntoIterator<Item = &'m M>,
{
    write!(f, "[")?;
    for (i, mv) in moves.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", mv)?;
    }
    write!(f, "]")
}

impl<S, M> fmt::Display for NodeTrace<'_, S, M>
where
    S: Clone + fmt::Display,
    M: Copy + Eq + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.get(self.id);

        if node.is_root() {
            writeln!(f, "ROOT")?;
        }
        writeln!(f, "Score ratio: {} / {}", node.score(), node.visits())?;

        write!(f, "Untried moves: ")?;
        write_moves(f, node.untried_moves())?;
        writeln!(f)?;

        write!(f, "Children's moves: ")?;
        let children = node
            .children()
            .iter()
            .filter_map(|&child| self.tree.get(child).incoming_move());
        write_moves(f, children)?;
        writeln!(f)?;

        writeln!(f, "State:")?;
        write!(f, "{}", node.position())
    }
}

#[cfg(test)]
mod tests {
    use crate::games::{TicTacToe, TicTacToeMove};
    use crate::node::NodeId;
    use crate::tree::Tree;
    use playout_core::{Game, Outcome, Player};

    #[test]
    fn test_root_trace_after_two_expansions() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        tree.expand_move(&game, NodeId::ROOT, TicTacToeMove(4));
        tree.expand_move(&game, NodeId::ROOT, TicTacToeMove(1));

        let expected = "\
ROOT
Score ratio: 0 / 0
Untried moves: [0, 2, 3, 5, 6, 7, 8]
Children's moves: [4, 1]
State:
. . .
. . .
. . .
";
        assert_eq!(tree.trace(NodeId::ROOT).to_string(), expected);
    }

    #[test]
    fn test_child_trace_shows_stats_and_board() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        let child = tree.expand_move(&game, NodeId::ROOT, TicTacToeMove(4));
        tree.update(child, Outcome::Win(Player::First));
        tree.update(child, Outcome::Draw);

        let expected = "\
Score ratio: 1.5 / 2
Untried moves: [0, 1, 2, 3, 5, 6, 7, 8]
Children's moves: []
State:
. . .
. X .
. . .
";
        assert_eq!(tree.trace(child).to_string(), expected);
    }
}
