//! Reachability search.
//!
//! From an origin tile a piece can reach:
//! - any tile at the end of a chain of one or more jumps, where each jump
//!   crosses an adjacent jumpable piece and lands on the empty on-board
//!   tile directly behind it;
//! - any empty on-board tile adjacent to the origin, in a single step.
//!
//! The search is a breadth-first traversal over jump landings, followed by
//! a separate pass over the origin's neighbours. Every jump displaces by
//! twice a unit direction, so jump landings keep the origin's coordinate
//! parity and can never coincide with a neighbour of the origin.
//!
//! The result is a parent map (tile -> tile it was reached from), wrapped in
//! [`Paths`]. Because the traversal is breadth-first, following parents
//! back from any tile gives a route with the fewest jumps.

use log::trace;
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::core::{Coord, PieceKind, HEX_DIRECTIONS};
use crate::grid::{CoordMap, CoordSet};

/// A route from origin to destination, both inclusive.
pub type Route = SmallVec<[Coord; 8]>;

/// Every tile reachable from an origin, with the tile each was reached from.
///
/// A `Paths` value is freshly built by each search and owns its data; it
/// never refers back into the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    origin: Coord,
    parents: CoordMap<Option<Coord>>,
}

impl Paths {
    #[must_use]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Number of reached tiles, counting the origin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Always false: the origin is reached by definition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    #[must_use]
    pub fn contains(&self, at: impl Into<Coord>) -> bool {
        self.parents.contains(at)
    }

    /// The tile `at` was reached from.
    ///
    /// `None` if `at` was not reached, `Some(None)` for the origin.
    #[must_use]
    pub fn parent(&self, at: impl Into<Coord>) -> Option<Option<Coord>> {
        self.parents.get(at).copied()
    }

    /// Reached tiles other than the origin, in discovery order.
    pub fn destinations(&self) -> impl Iterator<Item = Coord> + '_ {
        self.parents
            .iter()
            .filter(|(_, parent)| parent.is_some())
            .map(|(at, _)| at)
    }

    /// The route from the origin to `at`, or `None` if `at` was not reached.
    #[must_use]
    pub fn route_to(&self, at: impl Into<Coord>) -> Option<Route> {
        let mut cursor = at.into();
        let mut route = Route::new();
        let mut parent = *self.parents.get(cursor)?;
        route.push(cursor);
        while let Some(previous) = parent {
            cursor = previous;
            route.push(cursor);
            parent = self.parents.get(cursor).copied().flatten();
        }
        route.reverse();
        Some(route)
    }

    /// The raw parent map.
    #[must_use]
    pub fn into_parents(self) -> CoordMap<Option<Coord>> {
        self.parents
    }
}

/// Run the search from `origin`. The caller checks that `origin` is a tile.
pub(crate) fn search(board: &CoordSet, pieces: &CoordMap<PieceKind>, origin: Coord) -> Paths {
    let mut parents = CoordMap::new();
    parents.insert(origin, None);

    let mut frontier = VecDeque::from([origin]);
    while let Some(tile) = frontier.pop_front() {
        for dir in HEX_DIRECTIONS {
            let (Some(over), Some(goal)) = (tile.offset(dir, 1), tile.offset(dir, 2)) else {
                continue;
            };
            if parents.contains(goal) {
                continue;
            }
            if !pieces.get(over).is_some_and(|kind| kind.can_be_jumped()) {
                continue;
            }
            if !board.contains(goal) || pieces.contains(goal) {
                continue;
            }
            parents.insert(goal, Some(tile));
            frontier.push_back(goal);
        }
    }

    for step in origin.neighbors() {
        if board.contains(step) && !pieces.contains(step) {
            debug_assert!(!parents.contains(step), "step target {} was also a jump landing", step);
            parents.insert(step, Some(origin));
        }
    }

    trace!("search from {} reached {} tiles", origin, parents.len());
    Paths { origin, parents }
}
