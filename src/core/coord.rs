//! Axial hex coordinates.
//!
//! ## Coord
//!
//! An `(x, y)` pair of signed integers in axial layout. The six neighbours
//! of a tile are found by adding one of [`HEX_DIRECTIONS`].
//!
//! ## IntoCoord
//!
//! Raw coordinate input (tuples, arrays, slices coming from an interaction
//! layer) is validated through [`IntoCoord`]. Anything that is not exactly
//! two integers in `i32` range is rejected with `InvalidKey`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::error::{EngineError, KeyError, Result};

/// A board coordinate in axial hex layout.
///
/// ```
/// use hexjump::core::Coord;
///
/// let a = Coord::new(1, 2);
/// let b = Coord::from((1, 2));
/// assert_eq!(a, b);
/// assert_eq!(a + Coord::new(1, -1), Coord::new(2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// The six axial neighbour offsets, counter-clockwise from east.
pub const HEX_DIRECTIONS: [Coord; 6] = [
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: -1 },
];

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The implicit third cube coordinate (`x + y + z == 0`).
    ///
    /// Widened to `i64` since `-x - y` leaves `i32` range at the edges.
    #[inline]
    #[must_use]
    pub const fn z(self) -> i64 {
        -(self.x as i64) - (self.y as i64)
    }

    /// Step `steps` times along `dir`, or `None` if that leaves `i32` range.
    ///
    /// Used by the search so tiles at the numeric edge never panic.
    #[inline]
    #[must_use]
    pub fn offset(self, dir: Coord, steps: i32) -> Option<Coord> {
        let x = dir.x.checked_mul(steps)?.checked_add(self.x)?;
        let y = dir.y.checked_mul(steps)?.checked_add(self.y)?;
        Some(Coord::new(x, y))
    }

    /// The six adjacent coordinates that exist in `i32` range.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        HEX_DIRECTIONS.into_iter().filter_map(move |d| self.offset(d, 1))
    }

    /// Hex distance (number of single steps) between two coordinates.
    #[must_use]
    pub fn distance(self, other: Coord) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        let dz = (self.z() - other.z()).unsigned_abs();
        dx.max(dy).max(dz)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Component-wise `i32` arithmetic; overflow behaves as for `i32`. Use
// `Coord::offset` where the result may leave range.
impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

/// Conversion from raw coordinate input, rejecting malformed shapes.
///
/// ```
/// use hexjump::core::{Coord, ErrorKind, IntoCoord};
///
/// assert_eq!([3i64, -4].into_coord().unwrap(), Coord::new(3, -4));
///
/// let err = vec![1i64, 2, 3].into_coord().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidKey);
/// ```
pub trait IntoCoord {
    fn into_coord(self) -> Result<Coord>;
}

impl IntoCoord for Coord {
    #[inline]
    fn into_coord(self) -> Result<Coord> {
        Ok(self)
    }
}

impl IntoCoord for (i32, i32) {
    #[inline]
    fn into_coord(self) -> Result<Coord> {
        Ok(Coord::from(self))
    }
}

impl IntoCoord for (i64, i64) {
    fn into_coord(self) -> Result<Coord> {
        Ok(Coord::new(narrow(self.0)?, narrow(self.1)?))
    }
}

impl IntoCoord for [i64; 2] {
    fn into_coord(self) -> Result<Coord> {
        (self[0], self[1]).into_coord()
    }
}

impl IntoCoord for &[i64] {
    fn into_coord(self) -> Result<Coord> {
        match *self {
            [x, y] => (x, y).into_coord(),
            _ => Err(EngineError::InvalidKey(KeyError::WrongArity { len: self.len() })),
        }
    }
}

impl IntoCoord for Vec<i64> {
    fn into_coord(self) -> Result<Coord> {
        self.as_slice().into_coord()
    }
}

fn narrow(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| EngineError::InvalidKey(KeyError::OutOfRange { value }))
}
