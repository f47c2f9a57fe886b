//! Errors used throughout the rule engine.
//!
//! Two families exist:
//! - `ChessErrors` covers setup and addressing failures (malformed square or
//!   move text, malformed position setup, arena exhaustion) and internal
//!   board-edit invariant violations.
//! - `CommitRejection` is the closed set of reasons a move commit is refused.
//!   A rejection never leaves a partially applied move behind; callers are
//!   expected to offer only destinations obtained from `Game::legal_moves`.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Setup, addressing and board-edit errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Row or column outside `0..8`. Payload: (row, column).
    #[error("row/column out of range: {0:?}")]
    InvalidRowOrColumn((u8, u8)),

    /// A square name such as `e4` failed to parse.
    #[error("invalid square text: {0}")]
    InvalidSquareText(String),

    /// A coordinate move such as `e2e4` or `e7e8q` failed to parse.
    #[error("invalid coordinate move: {0}")]
    InvalidCoordinateMove(String),

    /// The position setup string is malformed.
    #[error("invalid position setup: {0}")]
    InvalidSetup(String),

    /// More pieces than the arena can hold.
    #[error("piece arena is full")]
    TooManyPieces,

    /// Tried to place a piece on an occupied square.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// Tried to view or move a piece from an empty square.
    #[error("square {0} is empty")]
    EmptySquare(Square),

    /// A board edit would break the grid/piece consistency.
    #[error("board edit rejected: {0}")]
    InvalidBoardEdit(String),

    /// An option name or value was not understood.
    #[error("invalid option {name}={value}")]
    InvalidOption { name: String, value: String },
}

/// Reasons a `Game::commit` is refused. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitRejection {
    /// The moving piece does not belong to the side to move.
    #[error("it is not this piece's turn")]
    NotYourTurn,

    /// The game has not started or has already ended.
    #[error("the game is not active")]
    GameNotActive,

    /// The destination is not among the freshly recomputed legal moves.
    #[error("destination {0} is not a legal move")]
    IllegalDestination(Square),

    /// A promotion kind was supplied for a non-promoting move, or the kind
    /// cannot be promoted to.
    #[error("invalid promotion choice {0:?}")]
    InvalidPromotionChoice(PieceKind),

    /// The origin square holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),
}
