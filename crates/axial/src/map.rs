// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! An insertion-ordered map with a traversal cursor and an optional FIFO capacity bound.
//!
//! # Cursor
//!
//! The cursor is an index into the key sequence, or unset. Traversal methods (`next`,
//! `previous`, `next_or_last`, `previous_or_first`) move it and return the value found at the
//! new position. Calling [`AxialMap::next`] from an unset cursor lands on the first entry.
//!
//! Removing an entry adjusts the cursor with a fixed rule: if the cursor is set and an entry
//! still exists at its index after the removal, the cursor steps back by one (stepping back from
//! index 0 unsets it). The rule does not look at where the removed entry was, so a removal after
//! the cursor also moves it, and removing the entry under a cursor at the last index leaves the
//! cursor past the end. [`AxialMap::splice`] relies on this exact sequencing.

use ahash::RandomState;
use indexmap::{
    IndexMap,
    map::{Iter, Keys, Values},
};

use crate::{
    config::{AxialMapConfig, Capacity},
    error::AxialMapError,
    key::AxialKey,
};

/// An insertion-ordered map with a traversal cursor and FIFO eviction.
///
/// Uses a single `IndexMap` (hashed with `ahash`) for both O(1) key lookups and the ordered key
/// sequence, so the two can never disagree. When the configured capacity is exceeded, the oldest
/// entry is automatically evicted.
///
/// # Thread Safety
///
/// This map is not thread-safe. If shared across threads, wrap it in an appropriate
/// synchronization primitive such as `Arc<Mutex<AxialMap<V>>>`.
///
/// # Examples
///
/// ```
/// use axial_map::AxialMap;
///
/// let mut map = AxialMap::with_max_size(2);
/// map.add(1, "one").unwrap();
/// map.add(2, "two").unwrap();
/// map.add(3, "three").unwrap();
///
/// // Adding beyond capacity evicts the oldest
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.first(), Some(&"two"));
///
/// // Forward traversal starts from an unset cursor
/// assert_eq!(map.next(), Some(&"two"));
/// assert_eq!(map.next(), Some(&"three"));
/// assert_eq!(map.next(), None);
///
/// // Keys must be strings or integers
/// assert!(map.add(1.5, "invalid").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct AxialMap<V> {
    entries: IndexMap<AxialKey, V, RandomState>,
    max_size: Capacity,
    cursor: Option<usize>,
}

impl<V> AxialMap<V> {
    /// Creates a new empty and unbounded [`AxialMap`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_bound(Capacity::Unbounded)
    }

    /// Creates a new empty [`AxialMap`] from the given `config`.
    #[must_use]
    pub fn with_config(config: &AxialMapConfig) -> Self {
        Self::with_capacity_bound(config.capacity())
    }

    /// Creates a new empty [`AxialMap`] holding at most `max_size` entries.
    ///
    /// A `max_size` of zero means unbounded.
    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self::with_capacity_bound(Capacity::from_max_size(max_size))
    }

    fn with_capacity_bound(max_size: Capacity) -> Self {
        Self {
            entries: IndexMap::with_hasher(RandomState::new()),
            max_size,
            cursor: None,
        }
    }

    /// Returns the capacity bound configured at construction.
    #[must_use]
    pub const fn max_size(&self) -> Capacity {
        self.max_size
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cursor position, or `None` if unset.
    ///
    /// The position can lie past the last entry after removals, see the module docs.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, AxialKey, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> Values<'_, AxialKey, V> {
        self.entries.values()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_, AxialKey, V> {
        self.entries.iter()
    }

    /// Returns whether the map contains the given key (O(1) lookup).
    #[must_use]
    pub fn contains_key(&self, key: &AxialKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a reference to the value for the given key (O(1) lookup).
    #[must_use]
    pub fn get(&self, key: &AxialKey) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value for the given key (O(1) lookup).
    pub fn get_mut(&mut self, key: &AxialKey) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Adds a key-value pair to the map, returning the previous value if the key existed.
    ///
    /// A new key is appended to the end of the key sequence. An existing key keeps its position
    /// and only its value is replaced. If the map is then over capacity, the oldest entry is
    /// evicted through [`AxialMap::remove`], so the cursor is adjusted as for any removal.
    ///
    /// # Errors
    ///
    /// Returns [`AxialMapError::InvalidKey`] if `key` is neither a string nor an integer. The map
    /// is not modified in that case.
    pub fn add<K>(&mut self, key: K, value: V) -> Result<Option<V>, AxialMapError>
    where
        K: TryInto<AxialKey>,
        AxialMapError: From<K::Error>,
    {
        let key = key.try_into()?;
        let previous = self.entries.insert(key, value);
        self.evict_overflow();
        Ok(previous)
    }

    fn evict_overflow(&mut self) {
        while self.max_size.is_exceeded_by(self.entries.len()) {
            match self.remove_index(0) {
                Some((key, _)) => log::debug!(
                    "Evicted oldest entry {key}: capacity {} exceeded",
                    self.max_size
                ),
                None => break,
            }
        }
    }

    /// Returns the first key, or `None` if the map is empty.
    #[must_use]
    pub fn first_key(&self) -> Option<&AxialKey> {
        self.entry_at(0).map(|(key, _)| key)
    }

    /// Returns the first value, or `None` if the map is empty.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.entry_at(0).map(|(_, value)| value)
    }

    /// Returns the last key, or `None` if the map is empty.
    #[must_use]
    pub fn last_key(&self) -> Option<&AxialKey> {
        self.entries.last().map(|(key, _)| key)
    }

    /// Returns the last value, or `None` if the map is empty.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Returns the `n`th key counting from 1, or `None` if `n` is zero or out of range.
    #[must_use]
    pub fn nth_key(&self, n: usize) -> Option<&AxialKey> {
        self.entry_at(n.checked_sub(1)?).map(|(key, _)| key)
    }

    /// Returns the `n`th value counting from 1, or `None` if `n` is zero or out of range.
    #[must_use]
    pub fn nth(&self, n: usize) -> Option<&V> {
        self.entry_at(n.checked_sub(1)?).map(|(_, value)| value)
    }

    fn entry_at(&self, index: usize) -> Option<(&AxialKey, &V)> {
        self.entries.get_index(index)
    }

    /// Moves the cursor to the position of `key`, or unsets it if the key is absent.
    pub fn set_cursor(&mut self, key: &AxialKey) {
        self.cursor = self.entries.get_index_of(key);
    }

    /// Unsets the cursor without touching the entries.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Returns the value at the cursor, or `None` if the cursor is unset or past the end.
    #[must_use]
    pub fn current(&self) -> Option<&V> {
        self.entry_at(self.cursor?).map(|(_, value)| value)
    }

    /// Returns the key at the cursor, or `None` if the cursor is unset or past the end.
    #[must_use]
    pub fn current_key(&self) -> Option<&AxialKey> {
        self.entry_at(self.cursor?).map(|(key, _)| key)
    }

    /// Advances the cursor and returns the value at the new position.
    ///
    /// Returns `None` and leaves the cursor unchanged if there is no entry after the cursor. From
    /// an unset cursor the entry after is the first one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&V> {
        let next = self.cursor.map_or(0, |cursor| cursor.saturating_add(1));
        if next >= self.entries.len() {
            return None;
        }

        self.cursor = Some(next);
        self.current()
    }

    /// Advances the cursor, staying on the last entry if already there, and returns the value
    /// at the new position.
    ///
    /// Returns `None` only if the map is empty.
    pub fn next_or_last(&mut self) -> Option<&V> {
        let last = self.entries.len().checked_sub(1)?;
        let next = self.cursor.map_or(0, |cursor| cursor.saturating_add(1));
        self.cursor = Some(next.min(last));
        self.current()
    }

    /// Rolls the cursor back and returns the value at the new position.
    ///
    /// Returns `None` and leaves the cursor unchanged if there is no entry before the cursor.
    pub fn previous(&mut self) -> Option<&V> {
        let previous = self.cursor?.checked_sub(1)?;
        if previous >= self.entries.len() {
            return None;
        }

        self.cursor = Some(previous);
        self.current()
    }

    /// Rolls the cursor back, staying on the first entry if already there, and returns the value
    /// at the new position.
    ///
    /// Returns `None` only if the map is empty.
    pub fn previous_or_first(&mut self) -> Option<&V> {
        let last = self.entries.len().checked_sub(1)?;
        let previous = self.cursor.map_or(0, |cursor| cursor.saturating_sub(1));
        self.cursor = Some(previous.min(last));
        self.current()
    }

    /// Returns clones of the entries from index `start` up to but excluding `end`.
    ///
    /// An `end` of `None` or beyond the last entry reads to the end of the map. Returns an empty
    /// vector if there is no entry at `start`. The entry at `start` is always included when
    /// present, even if `end <= start`.
    ///
    /// The entries are collected by traversal: the cursor is moved to `start` and then advanced
    /// with [`AxialMap::next`], so it is left on the last entry read.
    pub fn slice(&mut self, start: usize, end: Option<usize>) -> Vec<(AxialKey, V)>
    where
        V: Clone,
    {
        let Some((key, value)) = self.entry_at(start) else {
            return Vec::new();
        };

        let mut output = vec![(key.clone(), value.clone())];
        self.cursor = Some(start);

        for _ in start.saturating_add(1)..end.unwrap_or(usize::MAX) {
            if self.next().is_none() {
                break;
            }
            match self.cursor.and_then(|cursor| self.entry_at(cursor)) {
                Some((key, value)) => output.push((key.clone(), value.clone())),
                None => break,
            }
        }

        output
    }

    /// Removes up to `delete_count` entries starting at index `start` and returns them in
    /// removal order.
    ///
    /// A `delete_count` of `None` removes to the end of the map. Returns an empty vector if
    /// there is no entry at `start`; otherwise the entry at `start` is always removed.
    ///
    /// After each removal the cursor is adjusted as in [`AxialMap::remove`], then advanced with
    /// [`AxialMap::next`] onto the entry that now follows it, which is removed next.
    pub fn splice(&mut self, start: usize, delete_count: Option<usize>) -> Vec<(AxialKey, V)> {
        if start >= self.entries.len() {
            return Vec::new();
        }

        let delete_count = delete_count.unwrap_or(usize::MAX);
        self.cursor = Some(start);

        let mut removed: Vec<(AxialKey, V)> = self.remove_index(start).into_iter().collect();
        while removed.len() < delete_count {
            if self.next().is_none() {
                break;
            }
            match self.cursor.and_then(|cursor| self.remove_index(cursor)) {
                Some(entry) => removed.push(entry),
                None => break,
            }
        }

        log::trace!(
            "Spliced {} entries from index {start}, {} remaining",
            removed.len(),
            self.entries.len()
        );

        removed
    }

    /// Removes a key from the map, returning the key and its value if present.
    ///
    /// If the cursor is set and an entry still exists at its index after the removal, the
    /// cursor steps back by one. Returns `None` with no side effects if the key is absent.
    pub fn remove(&mut self, key: &AxialKey) -> Option<(AxialKey, V)> {
        let index = self.entries.get_index_of(key)?;
        self.remove_index(index)
    }

    fn remove_index(&mut self, index: usize) -> Option<(AxialKey, V)> {
        let removed = self.entries.shift_remove_index(index)?;

        if let Some(cursor) = self.cursor
            && cursor < self.entries.len()
        {
            self.cursor = cursor.checked_sub(1);
        }

        Some(removed)
    }

    /// Calls `callback` with each value, its key and its zero-based index, in insertion order.
    ///
    /// The cursor is not moved. The callback must be invocable, anything else is rejected at
    /// compile time:
    ///
    /// ```compile_fail
    /// use axial_map::AxialMap;
    ///
    /// let mut map = AxialMap::new();
    /// map.add("x", 1).unwrap();
    /// map.each("adfassdaf");
    /// ```
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&V, &AxialKey, usize),
    {
        for (index, (key, value)) in self.entries.iter().enumerate() {
            callback(value, key, index);
        }
    }

    /// Removes all entries and unsets the cursor, keeping the capacity bound.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl<V> Default for AxialMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a AxialMap<V> {
    type Item = (&'a AxialKey, &'a V);
    type IntoIter = Iter<'a, AxialKey, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
