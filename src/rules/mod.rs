//! Game state engine and reachability search.
//!
//! `GameEngine` enforces the board/piece/player invariants and validates
//! moves; `Paths` is the result of a reachability search from one tile.
//! The engine knows nothing about any particular ruleset beyond jumping
//! and single steps.

pub mod engine;
pub mod search;

pub use engine::GameEngine;
pub use search::{Paths, Route};
