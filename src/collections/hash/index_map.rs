//! `IndexMap`: an insertion-ordered hash map keyed by the `Hash + Eq` contract.
//!
//! This implementation combines a **SwissTable-inspired** hash table for lookups with
//! **dense vectors** for storage, preserving insertion order and enabling fast iteration.
//!
//! Structure:
//! - **Hash Table**: Stores indices into the dense vectors. Uses control bytes for group probing.
//! - **Dense Vectors**: `keys` (`Vec<K>`) and `values` (`Vec<V>`) store the actual data.
//!
//! Keys collide by value: two distinct instances that compare equal and hash
//! equally address the same entry. Graph structures use this to key rows,
//! buckets and vertex positions by vertex identity rather than by reference.
//!
//! Benefits:
//! - **Order Preservation**: Iteration order matches insertion order, also across removals.
//! - **Fast Iteration**: Iterating over dense vectors is cache-friendly.
//! - **Index Access**: O(1) access by position.

use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};
use std::collections::hash_map::RandomState;

// Control byte constants
const EMPTY: u8 = 0xFF;
const DELETED: u8 = 0xFE;
const GROUP_WIDTH: usize = 8;

/// Returns a mask where each byte is 0x80 if the corresponding byte in `x` is zero, else 0x00.
#[inline(always)]
fn has_zero_byte(x: u64) -> u64 {
    (x.wrapping_sub(0x0101_0101_0101_0101)) & (!x) & 0x8080_8080_8080_8080
}

/// Returns a mask where each byte is 0x80 if the corresponding byte in `x` matches `y`, else 0x00.
#[inline(always)]
fn match_byte(x: u64, y: u8) -> u64 {
    let pattern = u64::from(y) * 0x0101_0101_0101_0101;
    has_zero_byte(x ^ pattern)
}

#[inline(always)]
fn is_full(ctrl: u8) -> bool {
    ctrl & 0x80 == 0
}

/// Ordered hash map.
#[derive(Clone)]
pub struct IndexMap<K, V, S = RandomState> {
    /// Control bytes for the hash table part.
    ctrl: Box<[u8]>,
    /// Slots storing indices into the dense vectors.
    slots: Box<[usize]>,

    /// Dense storage for keys.
    keys: Vec<K>,
    /// Dense storage for values.
    values: Vec<V>,

    /// Occupied + deleted slots in the hash table, used to trigger rehash.
    /// `keys.len()` tracks the actual number of elements.
    items_count: usize,

    /// Capacity of the hash table (power of 2).
    table_capacity: usize,

    hash_builder: S,
}

impl<K, V> IndexMap<K, V, RandomState> {
    /// Creates an empty map with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::new())
    }

    /// Creates an empty map with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> IndexMap<K, V, S> {
    /// Creates an empty map with the given capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let table_capacity = if capacity == 0 {
            0
        } else {
            // Target load factor ~0.875
            (capacity * 8 / 7).next_power_of_two().max(8)
        };

        if table_capacity == 0 {
            return Self {
                ctrl: Box::new([]),
                slots: Box::new([]),
                keys: Vec::new(),
                values: Vec::new(),
                items_count: 0,
                table_capacity: 0,
                hash_builder,
            };
        }

        Self {
            ctrl: vec![EMPTY; table_capacity + GROUP_WIDTH].into_boxed_slice(),
            // Slot contents are only meaningful where the ctrl byte is full.
            slots: vec![0; table_capacity].into_boxed_slice(),
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            items_count: 0,
            table_capacity,
            hash_builder,
        }
    }

    /// Number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `true` if the map holds no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the key-value pair at the given position.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(index)?, self.values.get(index)?))
    }

    /// Clears the map, keeping the table allocation.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        self.items_count = 0;
        self.ctrl.fill(EMPTY);
    }

    /// Keys in insertion order, as a slice.
    #[inline]
    pub fn keys_slice(&self) -> &[K] {
        &self.keys
    }

    /// Iterator over keys in insertion order.
    pub fn keys(&self) -> core::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Iterator over values in insertion order.
    pub fn values(&self) -> core::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Mutable iterator over values in insertion order.
    pub fn values_mut(&mut self) -> core::slice::IterMut<'_, V> {
        self.values.iter_mut()
    }

    /// Iterator over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys.iter().zip(self.values.iter())
    }

    /// Iterator over key-value pairs (mutable values) in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> + '_ {
        self.keys.iter().zip(self.values.iter_mut())
    }

    #[inline(always)]
    fn load_group(&self, idx: usize) -> u64 {
        let mut group = [0u8; GROUP_WIDTH];
        group.copy_from_slice(&self.ctrl[idx..idx + GROUP_WIDTH]);
        u64::from_le_bytes(group)
    }

    #[inline(always)]
    fn set_ctrl(&mut self, slot_idx: usize, byte: u8) {
        self.ctrl[slot_idx] = byte;
        if slot_idx < GROUP_WIDTH {
            self.ctrl[self.table_capacity + slot_idx] = byte;
        }
    }
}

impl<K, V, S> IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn hash(&self, key: &K) -> (usize, u8) {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        let hash = hasher.finish();
        let h1 = (hash as usize) & (self.table_capacity - 1);
        let h2 = (hash >> 57) as u8;
        (h1, h2 & 0x7F)
    }

    /// Finds the slot in the hash table.
    /// Returns `(slot_index, true)` if found, `(slot_index, false)` with an insertion slot otherwise.
    fn find_slot(&self, key: &K, h1: usize, h2: u8) -> (usize, bool) {
        let mask = self.table_capacity - 1;
        let mut idx = h1;
        let mut step = GROUP_WIDTH;
        let mut first_deleted = None;
        let mut probes = 0;

        loop {
            let group_word = self.load_group(idx);

            let mut m = match_byte(group_word, h2);
            while m != 0 {
                let trailing = (m.trailing_zeros() / 8) as usize;
                let slot_idx = (idx + trailing) & mask;
                let dense_idx = self.slots[slot_idx];
                if is_full(self.ctrl[slot_idx]) && self.keys.get(dense_idx) == Some(key) {
                    return (slot_idx, true);
                }
                m &= m - 1;
            }

            let empty_mask = match_byte(group_word, EMPTY);
            if empty_mask != 0 {
                let trailing = (empty_mask.trailing_zeros() / 8) as usize;
                let empty_idx = (idx + trailing) & mask;
                return (first_deleted.unwrap_or(empty_idx), false);
            }

            if first_deleted.is_none() {
                let deleted_mask = match_byte(group_word, DELETED);
                if deleted_mask != 0 {
                    let trailing = (deleted_mask.trailing_zeros() / 8) as usize;
                    first_deleted = Some((idx + trailing) & mask);
                }
            }

            idx = (idx + step) & mask;
            step += GROUP_WIDTH;
            probes += 1;

            if probes > self.table_capacity {
                debug_assert!(first_deleted.is_some(), "IndexMap table has no free slot");
                return (first_deleted.unwrap_or(0), false);
            }
        }
    }

    fn lookup(&self, key: &K) -> Option<(usize, usize)> {
        if self.table_capacity == 0 {
            return None;
        }
        let (h1, h2) = self.hash(key);
        match self.find_slot(key, h1, h2) {
            (slot_idx, true) => Some((slot_idx, self.slots[slot_idx])),
            (_, false) => None,
        }
    }

    /// Position of `key` in insertion order.
    pub fn get_index_of(&self, key: &K) -> Option<usize> {
        self.lookup(key).map(|(_, dense_idx)| dense_idx)
    }

    /// `true` if an entry equal to `key` exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// Gets a shared reference to the value associated with the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        let (_, dense_idx) = self.lookup(key)?;
        self.values.get(dense_idx)
    }

    /// Gets a mutable reference to the value associated with the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let (_, dense_idx) = self.lookup(key)?;
        self.values.get_mut(dense_idx)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned and the entry
    /// is appended. If it did, the value is updated in place (keeping its
    /// position) and the old value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.reserve_one();

        let (h1, h2) = self.hash(&key);
        let (slot_idx, found) = self.find_slot(&key, h1, h2);

        if found {
            let dense_idx = self.slots[slot_idx];
            Some(core::mem::replace(&mut self.values[dense_idx], value))
        } else {
            self.occupy(slot_idx, h2, key, value);
            None
        }
    }

    /// Returns the value for `key`, inserting `make()` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.reserve_one();

        let (h1, h2) = self.hash(&key);
        let dense_idx = match self.find_slot(&key, h1, h2) {
            (slot_idx, true) => self.slots[slot_idx],
            (slot_idx, false) => self.occupy(slot_idx, h2, key, make()),
        };
        &mut self.values[dense_idx]
    }

    /// Removes a key from the map, returning the value.
    ///
    /// The relative order of the remaining entries is preserved; this is O(n).
    pub fn shift_remove(&mut self, key: &K) -> Option<V> {
        let (slot_idx, dense_idx) = self.lookup(key)?;

        // DELETED still counts towards `items_count` for probing.
        self.set_ctrl(slot_idx, DELETED);

        self.keys.remove(dense_idx);
        let value = self.values.remove(dense_idx);

        for slot in 0..self.table_capacity {
            if is_full(self.ctrl[slot]) && self.slots[slot] > dense_idx {
                self.slots[slot] -= 1;
            }
        }

        Some(value)
    }

    /// Keeps only the entries for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut kept_keys = Vec::with_capacity(self.keys.len());
        let mut kept_values = Vec::with_capacity(self.values.len());
        for (key, mut value) in self.keys.drain(..).zip(self.values.drain(..)) {
            if keep(&key, &mut value) {
                kept_keys.push(key);
                kept_values.push(value);
            }
        }
        self.keys = kept_keys;
        self.values = kept_values;
        self.rehash(self.table_capacity);
    }

    fn reserve_one(&mut self) {
        if self.table_capacity == 0 || self.items_count >= self.table_capacity * 7 / 8 {
            // Mostly tombstones: rehashing at the same size is enough.
            let new_cap = if self.keys.len() * 2 < self.items_count {
                self.table_capacity
            } else {
                (self.table_capacity * 2).max(8)
            };
            self.rehash(new_cap);
        }
    }

    fn occupy(&mut self, slot_idx: usize, h2: u8, key: K, value: V) -> usize {
        let dense_idx = self.keys.len();
        self.keys.push(key);
        self.values.push(value);

        let was_deleted = self.ctrl[slot_idx] == DELETED;
        self.slots[slot_idx] = dense_idx;
        self.set_ctrl(slot_idx, h2);
        if !was_deleted {
            self.items_count += 1;
        }
        dense_idx
    }

    fn rehash(&mut self, new_cap: usize) {
        self.table_capacity = new_cap;
        self.items_count = 0;
        if new_cap == 0 {
            self.ctrl = Box::new([]);
            self.slots = Box::new([]);
            return;
        }
        self.ctrl = vec![EMPTY; new_cap + GROUP_WIDTH].into_boxed_slice();
        self.slots = vec![0; new_cap].into_boxed_slice();

        // The dense vectors hold every live key, so the old table is not needed.
        let mask = new_cap - 1;
        for i in 0..self.keys.len() {
            let (h1, h2) = self.hash(&self.keys[i]);
            let mut idx = h1;
            let mut step = GROUP_WIDTH;

            loop {
                let empty_mask = match_byte(self.load_group(idx), EMPTY);
                if empty_mask != 0 {
                    let slot_idx = (idx + (empty_mask.trailing_zeros() / 8) as usize) & mask;
                    self.slots[slot_idx] = i;
                    self.set_ctrl(slot_idx, h2);
                    self.items_count += 1;
                    break;
                }

                idx = (idx + step) & mask;
                step += GROUP_WIDTH;
            }
        }
    }
}

impl<K, V> Default for IndexMap<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> PartialEq for IndexMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    /// Two maps are equal when they hold the same entries, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for IndexMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for IndexMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = IndexMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_map_basic() {
        let mut map = IndexMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"a"), Some(&1));
        assert_eq!(map.get(&"b"), Some(&2));

        // Test update
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(map.get(&"a"), Some(&10));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_index_map_order() {
        let mut map = IndexMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        map.insert(3, "three");

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);

        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_shift_remove_keeps_order() {
        let mut map = IndexMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);

        assert_eq!(map.shift_remove(&"b"), Some(2));
        assert_eq!(map.len(), 2);
        assert!(map.get(&"b").is_none());
        assert_eq!(map.get(&"c"), Some(&3));

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(map.get_index(1), Some((&"c", &3)));
        assert_eq!(map.get_index_of(&"c"), Some(1));

        assert_eq!(map.shift_remove(&"b"), None);
    }

    #[test]
    fn test_reinsert_after_remove_appends() {
        let mut map = IndexMap::new();
        map.insert(1, ());
        map.insert(2, ());
        map.shift_remove(&1);
        map.insert(1, ());
        assert_eq!(map.keys_slice(), &[2, 1]);
    }

    #[test]
    fn test_many_inserts_and_removes() {
        let mut map = IndexMap::new();
        for i in 0..1000 {
            map.insert(i, i * 2);
        }
        for i in (0..1000).step_by(2) {
            assert_eq!(map.shift_remove(&i), Some(i * 2));
        }
        assert_eq!(map.len(), 500);
        for i in 0..1000 {
            assert_eq!(map.get(&i).copied(), if i % 2 == 1 { Some(i * 2) } else { None });
        }
        let keys: Vec<_> = map.keys().copied().collect();
        let expected: Vec<_> = (0..1000).filter(|i| i % 2 == 1).collect();
        assert_eq!(keys, expected);

        // Churn on tombstones must not exhaust the table.
        for round in 0..50 {
            map.insert(10_000 + round, 0);
            map.shift_remove(&(10_000 + round));
        }
        assert_eq!(map.len(), 500);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: IndexMap<&str, Vec<u32>> = IndexMap::new();
        map.get_or_insert_with("x", Vec::new).push(1);
        map.get_or_insert_with("x", Vec::new).push(2);
        assert_eq!(map.get(&"x"), Some(&vec![1, 2]));
    }

    #[test]
    fn test_retain_and_equality_ignores_order() {
        let mut left: IndexMap<u32, u32> = (0..10).map(|i| (i, i)).collect();
        left.retain(|k, _| k % 3 == 0);
        let right: IndexMap<u32, u32> = [(9, 9), (6, 6), (3, 3), (0, 0)].into_iter().collect();
        assert_eq!(left, right);
        assert_eq!(left.keys_slice(), &[0, 3, 6, 9]);
        assert_eq!(left.get(&6), Some(&6));
    }
}
