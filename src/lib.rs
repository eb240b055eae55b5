//! # hexjump
//!
//! A rules engine for hexagonal-grid jump-capture board games.
//!
//! ## Design Principles
//!
//! 1. **Shape-Agnostic**: The board is any set of axial hex coordinates.
//!    Games describe it at setup; nothing assumes a particular outline.
//!
//! 2. **N-Player**: Players are registered and removed at runtime.
//!    No API assumes 2 players.
//!
//! 3. **Copies Out, Never Aliases**: Every container handed to a caller is
//!    an independent copy. Persistent `im` collections make that O(1).
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, piece kinds, errors
//! - `grid`: Coordinate-keyed set and map
//! - `rules`: Game state engine, reachability search, move validation
//! - `setup`: Board shapes and the setup builder

pub mod core;
pub mod grid;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Coord, EngineError, ErrorKind, IntoCoord, KeyError, PathError, PieceError,
    PieceKind, PlayerError, PlayerId, Result, HEX_DIRECTIONS, MAX_PLAYERS,
};

pub use crate::grid::{CoordMap, CoordSet};

pub use crate::rules::{GameEngine, Paths, Route};

pub use crate::setup::{shapes, GameSetup};
