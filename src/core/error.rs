//! Engine errors.
//!
//! Every failure is a synchronous precondition violation. `EngineError` has
//! one variant per kind, each carrying a structured payload with the
//! coordinates or indices involved. Callers that only care about the kind
//! use [`EngineError::kind`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;
use super::player::PlayerId;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Flat error kind, for callers that map failures to user feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidKey,
    InvalidArgument,
    Board,
    Piece,
    Player,
    Path,
}

/// Any failure reported by the containers or the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid coordinate: {0}")]
    InvalidKey(#[from] KeyError),

    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("piece error: {0}")]
    Piece(#[from] PieceError),

    #[error("player error: {0}")]
    Player(#[from] PlayerError),

    #[error("path error: {0}")]
    Path(#[from] PathError),
}

impl EngineError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidKey(_) => ErrorKind::InvalidKey,
            EngineError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            EngineError::Board(_) => ErrorKind::Board,
            EngineError::Piece(_) => ErrorKind::Piece,
            EngineError::Player(_) => ErrorKind::Player,
            EngineError::Path(_) => ErrorKind::Path,
        }
    }
}

/// Malformed raw coordinate input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("expected exactly 2 components, got {len}")]
    WrongArity { len: usize },

    #[error("component {value} does not fit in i32")]
    OutOfRange { value: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{at} is not a board tile")]
    OffBoard { at: Coord },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PieceError {
    /// A piece was required at `at`, but the tile is empty.
    #[error("no piece at {at}")]
    Empty { at: Coord },

    /// An empty tile was required at `at`.
    #[error("{at} is already occupied")]
    Occupied { at: Coord },

    /// A tile cannot be removed while a piece stands on it.
    #[error("tile {at} still holds a piece")]
    BlocksTileRemoval { at: Coord },

    #[error("unknown piece kind {input:?}")]
    UnknownKind { input: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("no players registered")]
    NoPlayers,

    #[error("{player} is out of range for {player_num} players")]
    OutOfRange { player: PlayerId, player_num: usize },

    /// The piece being moved does not belong to the current player.
    #[error("piece at {at} is not owned by the current player {current}")]
    NotYourPiece { at: Coord, current: PlayerId },

    /// A player cannot be removed while one of their pieces is on the board.
    #[error("{player} still has a piece at {at}")]
    PiecesRemain { player: PlayerId, at: Coord },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("source and destination are both {at}")]
    SameTile { at: Coord },

    #[error("{to} is not reachable from {from}")]
    Unreachable { from: Coord, to: Coord },
}
