use thiserror::Error;

/// Errors surfaced by the playout engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayoutError {
    #[error("position is already terminal")]
    TerminalPosition,

    #[error("no legal moves available in an undecided position")]
    NoLegalMoves,

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for playout operations
pub type Result<T> = std::result::Result<T, PlayoutError>;
