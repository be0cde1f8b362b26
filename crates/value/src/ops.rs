//! Shape checks and search/insert helpers for host arrays
//!
//! All helpers are pure: they read their inputs and return new arrays,
//! except [`remove_value`], which edits the array in place.

use crate::array::Array;
use crate::key::Key;
use crate::value::Value;

/// Projection applied to entries before comparing them with a needle.
pub type Projection<'a> = &'a dyn Fn(&Value) -> Value;

/// Returns `true` iff the keys are exactly `0..len` in order.
///
/// ```
/// use lumen_value::{Array, Key, Value, ops::is_list};
///
/// assert!(is_list(&Array::new()));
/// assert!(is_list(&Array::list(["a", "b"])));
///
/// let mut shifted = Array::new();
/// shifted.insert(Key::Index(1), Value::from("a"));
/// assert!(!is_list(&shifted));
/// ```
pub fn is_list(array: &Array) -> bool {
    array.is_list()
}

/// Returns `true` iff at least one key is a string key.
pub fn has_string_keys(array: &Array) -> bool {
    array.has_string_keys()
}

/// Inserts `entries` right after `key`, or at the end when `key` is absent.
///
/// Empty arrays and arrays with string keys keep every key: entries whose
/// key already precedes the insertion point are dropped, and existing
/// entries after it lose to an inserted entry with the same key. Lists (and
/// other integer-keyed arrays) are spliced instead, and the result is
/// renumbered from zero.
pub fn insert_after(array: &Array, key: &Key, entries: &Array) -> Array {
    let position = array.position(key).map_or(array.len(), |index| index + 1);

    if array.is_empty() || array.has_string_keys() {
        let mut merged = Array::with_capacity(array.len() + entries.len());
        let sequence = array
            .slice(0, position)
            .chain(entries.iter())
            .chain(array.slice(position, array.len()));
        for (key, value) in sequence {
            if !merged.contains_key(key) {
                merged.insert(key.clone(), value.clone());
            }
        }
        return merged;
    }

    array
        .slice(0, position)
        .chain(entries.iter())
        .chain(array.slice(position, array.len()))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Keeps the entries whose value matches `needle`, preserving keys.
///
/// With `strict` the comparison is `==`, otherwise
/// [`Value::loosely_equals`]. When `projection` is given, each value is
/// mapped through it before comparing; the kept entries still hold the
/// original values. Returns `None` when nothing matches.
pub fn search_values(
    array: &Array,
    needle: &Value,
    strict: bool,
    projection: Option<Projection<'_>>,
) -> Option<Array> {
    let is_match = |candidate: &Value| {
        if strict {
            candidate == needle
        } else {
            candidate.loosely_equals(needle)
        }
    };

    let found: Array = array
        .iter()
        .filter(|(_, value)| match projection {
            Some(project) => is_match(&project(*value)),
            None => is_match(*value),
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    (!found.is_empty()).then_some(found)
}

/// [`search_values`] over the array's key list.
///
/// The result maps key positions to the matching keys:
/// searching `{25252: 1, 46566: 2}` for `46566` yields `{1: 46566}`.
pub fn search_keys(
    array: &Array,
    needle: &Value,
    strict: bool,
    projection: Option<Projection<'_>>,
) -> Option<Array> {
    search_values(&array.key_list(), needle, strict, projection)
}

/// Removes every entry strictly equal to `value`, or every entry accepted by
/// `predicate` when one is given. Returns the number of removed entries.
pub fn remove_value(
    array: &mut Array,
    value: &Value,
    predicate: Option<&dyn Fn(&Value) -> bool>,
) -> usize {
    let doomed: Vec<Key> = array
        .iter()
        .filter(|(_, candidate)| match predicate {
            Some(accept) => accept(*candidate),
            None => *candidate == value,
        })
        .map(|(key, _)| key.clone())
        .collect();

    for key in &doomed {
        array.remove(key);
    }
    doomed.len()
}
