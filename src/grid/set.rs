//! Set of coordinates, used for board tiles.

use super::store::KeyedStore;
use crate::core::{Coord, IntoCoord, Result};

/// A set of coordinates with O(1) membership and insertion-ordered
/// iteration.
///
/// Cloning is cheap and yields a copy that shares no mutable state with
/// the source.
///
/// ## Example
///
/// ```
/// use hexjump::grid::CoordSet;
/// use hexjump::core::Coord;
///
/// let mut tiles = CoordSet::new();
/// tiles.insert((0, 0)).insert((1, 0)).insert((0, 0));
///
/// assert_eq!(tiles.len(), 2);
/// assert!(tiles.contains((1, 0)));
/// assert_eq!(tiles.iter().collect::<Vec<_>>(), vec![Coord::new(0, 0), Coord::new(1, 0)]);
/// ```
#[derive(Clone, Default)]
pub struct CoordSet {
    store: KeyedStore<()>,
}

impl CoordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Add a coordinate. Adding a present coordinate changes nothing.
    pub fn insert(&mut self, at: impl Into<Coord>) -> &mut Self {
        self.store.insert(at.into(), ());
        self
    }

    #[must_use]
    pub fn contains(&self, at: impl Into<Coord>) -> bool {
        self.store.contains(at.into())
    }

    /// Remove a coordinate. Returns whether it was present.
    pub fn remove(&mut self, at: impl Into<Coord>) -> bool {
        self.store.remove(at.into()).is_some()
    }

    /// Insert every coordinate of a raw sequence.
    ///
    /// All elements are validated before any is inserted: on `InvalidKey`
    /// the set is left unchanged.
    pub fn try_extend<I>(&mut self, coords: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoCoord,
    {
        let validated = coords
            .into_iter()
            .map(IntoCoord::into_coord)
            .collect::<Result<Vec<_>>>()?;
        self.extend(validated);
        Ok(())
    }

    /// Keep only coordinates for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(Coord) -> bool) {
        self.store.retain(|at, _| keep(at));
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Merge `other` into this set in place.
    pub fn union_with(&mut self, other: &CoordSet) -> &mut Self {
        self.store.absorb(&other.store);
        self
    }

    /// Coordinates in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.store.iter().map(|(at, _)| at)
    }
}

impl Extend<Coord> for CoordSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for at in iter {
            self.store.insert(at, ());
        }
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CoordSet::new();
        set.extend(iter);
        set
    }
}

/// Equality is by membership; insertion order is ignored.
impl PartialEq for CoordSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|at| other.contains(at))
    }
}

impl Eq for CoordSet {}

impl std::fmt::Debug for CoordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineError, KeyError};

    #[test]
    fn test_insert_contains_remove() {
        let mut set = CoordSet::new();
        set.insert((1, 2));

        assert!(set.contains((1, 2)));
        assert!(!set.contains((2, 1)));
        assert!(set.remove((1, 2)));
        assert!(!set.remove((1, 2)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_try_extend_is_atomic() {
        let mut set = CoordSet::new();
        set.insert((9, 9));

        let raw: Vec<Vec<i64>> = vec![vec![0, 0], vec![1, 0], vec![2], vec![3, 0]];
        let err = set.try_extend(raw).unwrap_err();

        assert_eq!(err, EngineError::InvalidKey(KeyError::WrongArity { len: 1 }));
        assert_eq!(set.len(), 1);
        assert!(!set.contains((0, 0)));
    }

    #[test]
    fn test_try_extend_accepts_mixed_raw_shapes() {
        let mut set = CoordSet::new();
        set.try_extend([[0i64, 0], [1, -1]]).unwrap();
        set.try_extend(vec![(4i64, 4i64)]).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains((1, -1)));
    }

    #[test]
    fn test_retain() {
        let mut set: CoordSet = (0..5).map(|x| Coord::new(x, -x)).collect();
        set.retain(|c| c.x >= 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Coord::new(3, -3), Coord::new(4, -4)]);
    }

    #[test]
    fn test_union_with() {
        let mut a: CoordSet = [Coord::new(0, 0), Coord::new(1, 0)].into_iter().collect();
        let b: CoordSet = [Coord::new(1, 0), Coord::new(2, 0)].into_iter().collect();
        a.union_with(&b);

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
        assert_eq!(
            a.iter().collect::<Vec<_>>(),
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_iteration_restarts() {
        let set: CoordSet = (0..3).map(|y| Coord::new(0, y)).collect();
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = set.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: CoordSet = [Coord::new(0, 0), Coord::new(1, 1)].into_iter().collect();
        let b: CoordSet = [Coord::new(1, 1), Coord::new(0, 0)].into_iter().collect();
        assert_eq!(a, b);
    }
}
