//! Board shape generators.
//!
//! Each function returns a fresh `CoordSet` of tiles. Shapes are laid out
//! in axial coordinates; cube-coordinate bounds use `z = -x - y`.

use crate::core::{Coord, EngineError, Result};
use crate::grid::CoordSet;

/// All tiles within `radius` steps of the origin.
///
/// Contains `3 * radius * (radius + 1) + 1` tiles.
#[must_use]
pub fn hexagon(radius: u16) -> CoordSet {
    let r = i32::from(radius);
    (-r..=r)
        .flat_map(|x| (-r..=r).map(move |y| Coord::new(x, y)))
        .filter(|c| c.z().abs() <= i64::from(r))
        .collect()
}

/// A `width` by `height` rhombus with its corner at the origin.
#[must_use]
pub fn parallelogram(width: u16, height: u16) -> CoordSet {
    let (w, h) = (i32::from(width), i32::from(height));
    (0..h)
        .flat_map(|y| (0..w).map(move |x| Coord::new(x, y)))
        .collect()
}

/// A triangle with `side` tiles per edge and its corner at the origin.
#[must_use]
pub fn triangle(side: u16) -> CoordSet {
    let s = i32::from(side);
    (0..s)
        .flat_map(|y| (0..s - y).map(move |x| Coord::new(x, y)))
        .collect()
}

/// A six-pointed star: a central hexagon of radius `arm` with a
/// triangular point of side `arm` on each of its six edges.
///
/// `star(4)` is the classic 121-tile star board.
#[must_use]
pub fn star(arm: u16) -> CoordSet {
    let n = i32::from(arm);
    (-2 * n..=2 * n)
        .flat_map(|x| (-2 * n..=2 * n).map(move |y| Coord::new(x, y)))
        .filter(|c| {
            let n = i64::from(n);
            let cube = [i64::from(c.x), i64::from(c.y), c.z()];
            cube.iter().all(|&v| v >= -n) || cube.iter().all(|&v| v <= n)
        })
        .collect()
}

/// One of the six points of [`star`], numbered 0 to 5 so that point `i`
/// is opposite point `(i + 3) % 6`.
///
/// Each point has `arm * (arm + 1) / 2` tiles.
///
/// Fails with `InvalidArgument` if `point >= 6`.
pub fn star_point(arm: u16, point: usize) -> Result<CoordSet> {
    if point >= 6 {
        return Err(EngineError::InvalidArgument {
            name: "point",
            value: i64::try_from(point).unwrap_or(i64::MAX),
        });
    }
    let n = i32::from(arm);
    let tiles = star(arm)
        .iter()
        .filter(|c| match point {
            0 => c.x > n,
            1 => c.z() < -i64::from(n),
            2 => c.y > n,
            3 => c.x < -n,
            4 => c.z() > i64::from(n),
            _ => c.y < -n,
        })
        .collect();
    Ok(tiles)
}
