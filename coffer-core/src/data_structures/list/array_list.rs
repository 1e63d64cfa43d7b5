use std::slice;

use crate::data_structures::{Collection, ListCollection};
use crate::error::{CollectionError, Result};

/// List backed by a contiguous, growable buffer.
///
/// Appending is amortized O(1) and indexing is O(1). Inserting at the front
/// and removing anywhere but the tail shift the following elements, O(n).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        ArrayList {
            elements: Vec::new(),
        }
    }

    /// Create an empty list with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(CollectionError::out_of_bounds(index, self.elements.len()))
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> ListCollection<T> for ArrayList<T> {
    fn add_first(&mut self, item: T) {
        self.elements.insert(0, item);
    }

    fn add_last(&mut self, item: T) {
        self.elements.push(item);
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.elements
            .get(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.elements.len()))
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.elements[index], item))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.elements.remove(index))
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|e| e == item)
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayList {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

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
    fn test_add_first_shifts_right() {
        let mut list = ArrayList::new();
        list.add(2);
        list.add(3);
        list.add_first(1);

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.get(0), Ok(&1));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut list: ArrayList<&str> = ["Java", "Go", "Python"].into_iter().collect();

        assert_eq!(list.set(1, "Rust"), Ok("Go"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec!["Java", "Rust", "Python"]);
    }

    #[test]
    fn test_failed_set_leaves_list_unchanged() {
        let mut list: ArrayList<i32> = (0..3).collect();

        let err = list.set(3, 99).unwrap_err();
        assert_eq!(err, CollectionError::OutOfBounds { index: 3, len: 3 });
        assert_eq!(list.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_out_of_bounds_on_empty() {
        let mut list: ArrayList<i32> = ArrayList::new();
        assert!(list.remove(0).unwrap_err().is_out_of_bounds());
        assert!(list.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let mut list = ArrayList::with_capacity(16);
        assert!(list.capacity() >= 16);
        assert!(list.is_empty());

        list.extend([1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_iter_borrowed_and_owned() {
        let list: ArrayList<i32> = (1..=4).collect();

        let doubled: Vec<i32> = list.iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6, 8]);

        let mut sum = 0;
        for x in &list {
            sum += x;
        }
        assert_eq!(sum, 10);

        let owned: Vec<i32> = list.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_to_vec_is_detached() {
        let mut list: ArrayList<i32> = (1..=3).collect();
        let mut snapshot = list.to_vec();
        snapshot.push(4);
        list.add(5);

        assert_eq!(snapshot, vec![1, 2, 3, 4]);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5]);
    }
}
