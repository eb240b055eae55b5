//! Canonical coordinate keys.
//!
//! A `Coord` is packed into a single `u64` (x in the high half, y in the
//! low half, both as two's-complement `u32`). Equal coordinates always
//! produce equal keys. This module is the only place that knows the
//! layout; nothing outside `grid` ever sees a `CoordKey`.

use crate::core::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct CoordKey(u64);

impl CoordKey {
    #[inline]
    pub(crate) fn encode(at: Coord) -> Self {
        CoordKey((u64::from(at.x as u32) << 32) | u64::from(at.y as u32))
    }

    #[inline]
    pub(crate) fn decode(self) -> Coord {
        Coord::new((self.0 >> 32) as u32 as i32, self.0 as u32 as i32)
    }
}

impl From<Coord> for CoordKey {
    #[inline]
    fn from(at: Coord) -> Self {
        Self::encode(at)
    }
}
