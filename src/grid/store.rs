//! Insertion-ordered keyed storage shared by `CoordSet` and `CoordMap`.
//!
//! Lookups go through an `im::HashMap` keyed by `CoordKey` (Fx hashed).
//! Iteration order is kept in an `im::OrdMap` from insertion sequence
//! number to key: overwriting a live key keeps its sequence number,
//! removing and re-inserting gives it a fresh one. Both halves are
//! persistent, so cloning a store is O(1) and the clone is fully
//! independent of the original.

use im::{HashMap as ImHashMap, OrdMap};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use super::key::CoordKey;
use crate::core::Coord;

type FxBuild = BuildHasherDefault<FxHasher>;

#[derive(Clone)]
pub(crate) struct KeyedStore<V> {
    /// key -> (insertion sequence, value)
    slots: ImHashMap<CoordKey, (u64, V), FxBuild>,

    /// insertion sequence -> key, for ordered iteration
    order: OrdMap<u64, CoordKey>,

    next_seq: u64,
}

impl<V: Clone> Default for KeyedStore<V> {
    fn default() -> Self {
        Self {
            slots: ImHashMap::default(),
            order: OrdMap::new(),
            next_seq: 0,
        }
    }
}

impl<V: Clone> KeyedStore<V> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn contains(&self, at: Coord) -> bool {
        self.slots.contains_key(&CoordKey::encode(at))
    }

    #[inline]
    pub(crate) fn get(&self, at: Coord) -> Option<&V> {
        self.slots.get(&CoordKey::encode(at)).map(|(_, v)| v)
    }

    /// Insert or overwrite. Returns the previous value, if any.
    pub(crate) fn insert(&mut self, at: Coord, value: V) -> Option<V> {
        self.insert_key(CoordKey::encode(at), value)
    }

    fn insert_key(&mut self, key: CoordKey, value: V) -> Option<V> {
        let seq = match self.slots.get(&key) {
            Some((seq, _)) => *seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.order.insert(seq, key);
                seq
            }
        };
        self.slots.insert(key, (seq, value)).map(|(_, old)| old)
    }

    pub(crate) fn remove(&mut self, at: Coord) -> Option<V> {
        let (seq, value) = self.slots.remove(&CoordKey::encode(at))?;
        self.order.remove(&seq);
        Some(value)
    }

    /// Keep only entries for which `keep` returns true.
    ///
    /// The doomed keys are collected first, then removed, so the predicate
    /// always sees the store as it was before the call.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Coord, &V) -> bool) {
        let doomed: Vec<Coord> = self
            .iter()
            .filter(|&(c, v)| !keep(c, v))
            .map(|(c, _)| c)
            .collect();
        for at in doomed {
            self.remove(at);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots = ImHashMap::default();
        self.order = OrdMap::new();
    }

    /// Add every entry of `other` whose key is absent here, in `other`'s
    /// order. Keys are copied as-is, without a decode/encode round trip.
    pub(crate) fn absorb(&mut self, other: &KeyedStore<V>) {
        for key in other.order.values() {
            if self.slots.contains_key(key) {
                continue;
            }
            if let Some((_, value)) = other.slots.get(key) {
                self.insert_key(*key, value.clone());
            }
        }
    }

    /// Entries in first-insertion order of each live key.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Coord, &V)> + '_ {
        self.order
            .values()
            .filter_map(move |key| self.slots.get(key).map(|(_, v)| (key.decode(), v)))
    }
}
