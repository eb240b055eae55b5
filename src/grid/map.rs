//! Map keyed by coordinates, used for piece occupancy.

use super::store::KeyedStore;
use crate::core::{Coord, IntoCoord, Result};

/// A map from coordinates to values with O(1) lookup and
/// insertion-ordered iteration.
///
/// Each coordinate holds at most one value. Overwriting a value keeps the
/// coordinate's place in iteration order.
///
/// ## Example
///
/// ```
/// use hexjump::grid::CoordMap;
///
/// let mut pieces = CoordMap::new();
/// pieces.insert((0, 0), 'a').insert((2, -1), 'b');
///
/// assert_eq!(pieces.get((2, -1)), Some(&'b'));
/// assert_eq!(pieces.remove((0, 0)), Some('a'));
/// assert_eq!(pieces.get((0, 0)), None);
/// ```
#[derive(Clone)]
pub struct CoordMap<V: Clone> {
    store: KeyedStore<V>,
}

impl<V: Clone> Default for CoordMap<V> {
    fn default() -> Self {
        Self {
            store: KeyedStore::default(),
        }
    }
}

impl<V: Clone> CoordMap<V> {
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

    /// Set the value at a coordinate, overwriting any previous value.
    pub fn insert(&mut self, at: impl Into<Coord>, value: V) -> &mut Self {
        self.store.insert(at.into(), value);
        self
    }

    #[must_use]
    pub fn contains(&self, at: impl Into<Coord>) -> bool {
        self.store.contains(at.into())
    }

    #[must_use]
    pub fn get(&self, at: impl Into<Coord>) -> Option<&V> {
        self.store.get(at.into())
    }

    /// Remove the value at a coordinate, returning it if there was one.
    pub fn remove(&mut self, at: impl Into<Coord>) -> Option<V> {
        self.store.remove(at.into())
    }

    /// Insert every pair of a raw sequence.
    ///
    /// All keys are validated before any pair is inserted: on `InvalidKey`
    /// the map is left unchanged.
    pub fn try_extend<I, K>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoCoord,
    {
        let validated = entries
            .into_iter()
            .map(|(k, v)| k.into_coord().map(|at| (at, v)))
            .collect::<Result<Vec<_>>>()?;
        self.extend(validated);
        Ok(())
    }

    /// Keep only entries for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(Coord, &V) -> bool) {
        self.store.retain(keep);
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// `(coordinate, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &V)> + '_ {
        self.store.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = Coord> + '_ {
        self.store.iter().map(|(at, _)| at)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.store.iter().map(|(_, v)| v)
    }
}

impl<V: Clone> Extend<(Coord, V)> for CoordMap<V> {
    fn extend<I: IntoIterator<Item = (Coord, V)>>(&mut self, iter: I) {
        for (at, value) in iter {
            self.store.insert(at, value);
        }
    }
}

impl<V: Clone> FromIterator<(Coord, V)> for CoordMap<V> {
    fn from_iter<I: IntoIterator<Item = (Coord, V)>>(iter: I) -> Self {
        let mut map = CoordMap::new();
        map.extend(iter);
        map
    }
}

/// Equality is by contents; insertion order is ignored.
impl<V: Clone + PartialEq> PartialEq for CoordMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(at, v)| other.get(at) == Some(v))
    }
}

impl<V: Clone + Eq> Eq for CoordMap<V> {}

impl<V: Clone + std::fmt::Debug> std::fmt::Debug for CoordMap<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
