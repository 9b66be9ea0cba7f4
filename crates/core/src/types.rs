//! Player identities and game outcomes.
//!
//! Outcomes are reported from a global viewpoint (who won), and converted to
//! a per-player credit in [0, 1] only when a search needs to score a node:
//! - 1.0: the player in question won
//! - 0.5: draw
//! - 0.0: the player in question lost

use std::fmt;

/// Credit awarded for a draw.
pub const DRAW_CREDIT: f64 = 0.5;

/// One of the two players. `First` always makes the opening move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Get the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Zero-based index: 0 for `First`, 1 for `Second`.
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Inverse of [`Player::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

/// Result of a game at some position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game is still in progress.
    Undecided,
    /// The given player has won.
    Win(Player),
    /// The game ended without a winner.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Credit in [0, 1] for a node whose player to move is `mover`.
    ///
    /// The mover at a node is the player who did NOT make the move leading
    /// into it, so a win for the mover scores 0.0 there and a win for the
    /// opponent scores 1.0. The parent, whose mover made that move, reads the
    /// child's ratio as its own win rate. `Undecided` scores like a draw.
    pub fn credit_for(self, mover: Player) -> f64 {
        match self {
            Outcome::Win(winner) if winner == mover => 0.0,
            Outcome::Win(_) => 1.0,
            Outcome::Draw | Outcome::Undecided => DRAW_CREDIT,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
