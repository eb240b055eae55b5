//! Core value types: coordinates, players, piece kinds, errors.
//!
//! These types carry no game state. The containers in `grid` and the
//! engine in `rules` are built on top of them.

pub mod coord;
pub mod error;
pub mod piece;
pub mod player;

pub use coord::{Coord, IntoCoord, HEX_DIRECTIONS};
pub use error::{
    BoardError, EngineError, ErrorKind, KeyError, PathError, PieceError, PlayerError, Result,
};
pub use piece::PieceKind;
pub use player::{PlayerId, MAX_PLAYERS};
