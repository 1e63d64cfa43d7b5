use crate::data_structures::Collection;
use crate::error::Result;

/// A sequence whose elements are addressed by position.
///
/// Indices are dense: after every mutation the elements occupy `0..len()`
/// with no gaps.
///
/// # Errors
///
/// `get`, `set` and `remove` return
/// [`CollectionError::OutOfBounds`](crate::CollectionError::OutOfBounds)
/// when `index >= len()`. The list is left unchanged in that case.
///
/// # Example
///
/// ```rust
/// use coffer_core::data_structures::{LinkedList, ListCollection};
///
/// let mut list = LinkedList::new();
/// list.add(10);
/// list.add(20);
/// list.add(30);
///
/// assert_eq!(list.remove(1), Ok(20));
/// assert_eq!(list.get(1), Ok(&30));
/// assert!(list.get(2).is_err());
/// assert_eq!(list.index_of(&30), Some(1));
/// ```
///
pub trait ListCollection<T>: Collection<T> {
    /// Append an element. Same as [`add_last`](Self::add_last).
    fn add(&mut self, item: T) {
        self.add_last(item);
    }

    /// Insert an element at index 0, shifting every existing element up by one.
    fn add_first(&mut self, item: T);

    /// Insert an element at index `len()`.
    fn add_last(&mut self, item: T);

    /// Get a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replace the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Remove and return the element at `index`.
    ///
    /// Every element after `index` moves down by one position.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Returns the lowest index whose element equals `item`.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;
}
