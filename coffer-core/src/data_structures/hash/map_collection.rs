use std::hash::Hash;

use crate::data_structures::Collection;
use crate::error::Result;

/// A trait for key-value containers.
///
/// Keys are unique: `put` on an existing key overwrites its value. As a
/// [`Collection`] the map is a collection of its values, so `contains` checks
/// values and `to_vec` snapshots them.
///
/// # Design Philosophy
///
/// ```text
/// User Code
///    ↓ uses
/// Collection<V>                   ← len / clear / contains value / snapshot
///    ↓ extended by
/// MapCollection<K, V> (this trait) ← keyed access
///    ↓ implemented by
/// HashMap                         ← delegates storage to the std hash table
/// ```
///
/// # Errors
///
/// `get` returns [`CollectionError::KeyNotFound`](crate::CollectionError::KeyNotFound)
/// for an absent key. `remove` on an absent key is not an error.
///
/// # Example
///
/// ```rust
/// use coffer_core::data_structures::{HashMap, MapCollection};
///
/// let mut student = HashMap::new();
/// student.put("nim", "123456");
/// student.put("nama", "Budi");
///
/// assert_eq!(student.get(&"nama"), Ok(&"Budi"));
/// assert!(student.get(&"missing").is_err());
///
/// assert!(student.remove(&"nim"));
/// assert!(!student.contains_key(&"nim"));
/// assert!(!student.remove(&"nim"));
/// ```
///
pub trait MapCollection<K, V>: Collection<V>
where
    K: Hash + Eq,
{
    /// Insert or overwrite the value for `key`.
    ///
    /// Returns the value previously stored under `key`, if any.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Get a reference to the value for `key`.
    fn get(&self, key: &K) -> Result<&V>;

    /// Remove the entry for `key`.
    ///
    /// Returns `true` if an entry was removed, `false` if the key was absent.
    fn remove(&mut self, key: &K) -> bool;

    /// Check if an entry exists for `key`.
    fn contains_key(&self, key: &K) -> bool;

    /// Check if any entry holds `value`. O(n).
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq;

    /// Snapshot of all keys.
    ///
    /// The order is unspecified but matches [`values`](Self::values) and
    /// [`entries`](Self::entries) as long as the map is not modified in between.
    fn keys(&self) -> Vec<K>
    where
        K: Clone;

    /// Snapshot of all values, paired positionally with [`keys`](Self::keys).
    fn values(&self) -> Vec<V>
    where
        V: Clone;

    /// Snapshot of all key-value pairs.
    fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone;
}
