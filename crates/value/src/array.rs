//! Ordered host arrays

use indexmap::IndexMap;

use crate::key::Key;
use crate::value::Value;

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// Both sequences and mappings are arrays: `[a, b]` is the array
/// `{0: a, 1: b}`. [`Array::push`] appends under the next free integer key,
/// one past the largest integer key ever inserted.
///
/// Equality is order-sensitive: two arrays are equal only when they hold
/// the same key/value pairs in the same order.
#[derive(Debug, Clone, Default)]
pub struct Array {
    entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Builds a list (`0..n` keys) from values.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        values.into_iter().map(Into::<Value>::into).collect()
    }

    /// Appends a value under the next free integer key.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = Key::Index(self.next_index);
        self.insert(key, value);
    }

    /// Inserts or replaces the value stored under `key`.
    ///
    /// Replacing keeps the original position of the key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Index(index) = key
            && index >= self.next_index
        {
            self.next_index = index.saturating_add(1);
        }
        self.entries.insert(key, value.into())
    }

    /// Removes the entry under `key`, preserving the order of the rest.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the entry at `position` in iteration order.
    pub fn get_at(&self, position: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(position)
    }

    /// Returns the iteration position of `key`.
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if some value strictly equals `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.entries.values().any(|candidate| candidate == value)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the array holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns the keys as a list array (`Int` / `Text` values).
    #[must_use]
    pub fn key_list(&self) -> Self {
        self.entries.keys().map(Key::to_value).collect()
    }

    /// Returns `true` iff the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(position, key)| key.as_index() == Some(position as i64))
    }

    /// Returns `true` iff at least one key is a string key.
    pub fn has_string_keys(&self) -> bool {
        self.entries.keys().any(Key::is_name)
    }

    /// Slices entries by position, keeping their keys.
    pub(crate) fn slice(&self, start: usize, end: usize) -> impl Iterator<Item = (&Key, &Value)> {
        let end = end.min(self.entries.len());
        let start = start.min(end);
        self.entries.iter().skip(start).take(end - start)
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl Extend<(Key, Value)> for Array {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
