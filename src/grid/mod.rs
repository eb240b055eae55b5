//! Coordinate-keyed containers.
//!
//! ## Key Types
//!
//! - `CoordSet`: set of coordinates (board tiles)
//! - `CoordMap`: coordinate -> value map (piece occupancy)
//!
//! Both reduce a `Coord` to an opaque canonical key internally and only
//! decode back to `Coord` while iterating. The key layout never leaves this
//! module.

mod key;
mod store;

pub mod map;
pub mod set;

pub use map::CoordMap;
pub use set::CoordSet;
