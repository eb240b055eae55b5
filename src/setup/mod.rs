//! Starting positions.
//!
//! The engine has no configuration of its own; a game is configured by the
//! setup sequence that populates it. `GameSetup` collects that sequence and
//! `shapes` provides common board outlines.

pub mod builder;
pub mod shapes;

pub use builder::GameSetup;
