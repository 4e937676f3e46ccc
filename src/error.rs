//! Error type shared by the board, transform and engine modules.
use thiserror::Error;

/// Errors emitted by the 2048 rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A direction token was not one of `u`, `l`, `d`, `r` (or their long forms).
    #[error("invalid direction '{0}'")]
    InvalidDirection(String),
    /// A board failed shape or content validation.
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    /// A tile was requested on a board with no empty cells.
    #[error("cannot add a tile to a full board")]
    BoardFull,
}
