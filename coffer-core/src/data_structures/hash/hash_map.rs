use std::collections::HashMap as StdHashMap;
use std::collections::hash_map;
use std::hash::Hash;

use crate::data_structures::{Collection, MapCollection};
use crate::error::{CollectionError, Result};

/// Map backed by the standard library's hash table.
///
/// Hashing, collision handling and resizing are all left to the host table.
/// Iteration order is unspecified; `keys`, `values` and `entries` walk the
/// table once in the same order, so their results pair up positionally.
///
#[derive(Debug, Clone)]
pub struct HashMap<K, V> {
    map: StdHashMap<K, V>,
}

impl<K, V> HashMap<K, V> {
    pub fn new() -> Self {
        HashMap {
            map: StdHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HashMap {
            map: StdHashMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns an iterator over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.map.iter()
    }
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Collection<V> for HashMap<K, V>
where
    K: Hash + Eq,
{
    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn contains(&self, item: &V) -> bool
    where
        V: PartialEq,
    {
        self.contains_value(item)
    }

    fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values()
    }
}

impl<K, V> MapCollection<K, V> for HashMap<K, V>
where
    K: Hash + Eq,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn get(&self, key: &K) -> Result<&V> {
        self.map.get(key).ok_or_else(CollectionError::key_not_found)
    }

    fn remove(&mut self, key: &K) -> bool {
        self.map.remove(key).is_some()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.values().any(|v| v == value)
    }

    fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.map.keys().cloned().collect()
    }

    fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.map.values().cloned().collect()
    }

    fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.map
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> PartialEq for HashMap<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> Eq for HashMap<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

impl<K, V> FromIterator<(K, V)> for HashMap<K, V>
where
    K: Hash + Eq,
{
    /// Later pairs overwrite earlier pairs with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        HashMap {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for HashMap<K, V>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K, V> IntoIterator for HashMap<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a HashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_overwrites() {
        let mut map = HashMap::new();

        assert_eq!(map.put("k", 1), None);
        assert_eq!(map.put("k", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"k"), Ok(&2));
    }

    #[test]
    fn test_missing_key() {
        let map: HashMap<&str, i32> = HashMap::new();

        let err = map.get(&"missing").unwrap_err();
        assert_eq!(err, CollectionError::KeyNotFound);
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_contains_is_value_membership() {
        let mut map = HashMap::new();
        map.put("jurusan", "Informatika");

        assert!(map.contains(&"Informatika"));
        assert!(map.contains_value(&"Informatika"));
        assert!(!map.contains(&"jurusan"));
        assert!(map.contains_key(&"jurusan"));
    }

    #[test]
    fn test_snapshots_pair_up() {
        let map: HashMap<i32, String> = (0..50).map(|i| (i, format!("v{}", i))).collect();

        let keys = map.keys();
        let values = map.values();
        let entries = map.entries();

        assert_eq!(keys.len(), 50);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(values[i], format!("v{}", key));
            assert_eq!(entries[i], (*key, values[i].clone()));
        }
        assert_eq!(map.to_vec(), values);
    }

    #[test]
    fn test_clear_and_remove() {
        let mut map: HashMap<i32, i32> = (0..5).map(|i| (i, i * i)).collect();

        assert!(map.remove(&2));
        assert!(!map.remove(&2));
        assert_eq!(map.len(), 4);

        map.clear();
        assert!(map.is_empty());
        assert!(map.keys().is_empty());
    }

    #[test]
    fn test_eq_and_iter() {
        let a: HashMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
        let mut b = HashMap::with_capacity(2);
        b.extend([(2, 20), (1, 10)]);

        assert_eq!(a, b);
        let total: i32 = (&a).into_iter().map(|(_, v)| v).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_iter_borrowed_and_owned() {
        let map: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        let mut borrowed: Vec<(&str, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        borrowed.sort();
        assert_eq!(borrowed, vec![("a", 1), ("b", 2), ("c", 3)]);

        let mut owned: Vec<(&str, i32)> = map.into_iter().collect();
        owned.sort();
        assert_eq!(owned, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_eq_is_reflexive_and_usable_as_eq() {
        fn assert_eq_bound<T: Eq>(_: &T) {}

        let map: HashMap<String, u8> = [("x".to_string(), 1)].into_iter().collect();
        assert_eq_bound(&map);
        assert!(map == map.clone());
    }
}
