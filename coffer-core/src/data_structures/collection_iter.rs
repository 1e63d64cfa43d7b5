//! Detached cursor over a snapshot of a collection.

use crate::data_structures::Collection;
use crate::error::{CollectionError, Result};

// ============================================================================
// CollectionIterator - Cursor over a frozen copy of a collection
// ============================================================================

/// Cursor over a snapshot of any [`Collection`].
///
/// The snapshot is taken once, in [`new`](Self::new), via
/// [`Collection::to_vec`]. The iterator owns that copy, so it neither borrows
/// the source nor sees any later change to it, and [`reset`](Self::reset)
/// replays the same frozen elements.
///
/// # Example
///
/// ```rust
/// use coffer_core::data_structures::{ArrayList, CollectionIterator};
///
/// let list: ArrayList<i32> = (1..=3).collect();
/// let mut iter = CollectionIterator::new(&list);
///
/// let mut seen = Vec::new();
/// while iter.has_next() {
///     seen.push(*iter.next()?);
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert!(iter.next().is_err());
/// # Ok::<(), coffer_core::CollectionError>(())
/// ```
///
#[derive(Debug, Clone)]
pub struct CollectionIterator<T> {
    elements: Vec<T>,
    position: usize,
}

impl<T> CollectionIterator<T> {
    /// Snapshot `collection` and position the cursor at its first element.
    pub fn new<C>(collection: &C) -> Self
    where
        C: Collection<T> + ?Sized,
        T: Clone,
    {
        CollectionIterator {
            elements: collection.to_vec(),
            position: 0,
        }
    }

    /// Returns true if [`next`](Self::next) will yield an element.
    pub fn has_next(&self) -> bool {
        self.position < self.elements.len()
    }

    /// Return the element under the cursor and advance past it.
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(CollectionError::out_of_bounds(
                self.position,
                self.elements.len(),
            ));
        }
        let index = self.position;
        self.position += 1;
        Ok(&self.elements[index])
    }

    /// Return the element under the cursor without advancing.
    pub fn current(&self) -> Result<&T> {
        self.elements
            .get(self.position)
            .ok_or_else(|| CollectionError::out_of_bounds(self.position, self.elements.len()))
    }

    /// Move the cursor back to the first element of the snapshot.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Number of elements in the snapshot.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements `next` has yet to yield.
    pub fn remaining(&self) -> usize {
        self.elements.len() - self.position
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::{
        ArrayList, HashMap, LinkedList, ListCollection, MapCollection, Queue, QueueCollection,
        Stack, StackCollection,
    };

    #[test]
    fn test_read_then_advance() {
        let list: ArrayList<i32> = (1..=3).collect();
        let mut iter = CollectionIterator::new(&list);

        assert_eq!(iter.current(), Ok(&1));
        assert_eq!(iter.next(), Ok(&1));
        assert_eq!(iter.current(), Ok(&2));
        assert_eq!(iter.remaining(), 2);
        assert_eq!(iter.next(), Ok(&2));
        assert_eq!(iter.next(), Ok(&3));

        assert!(!iter.has_next());
        assert_eq!(
            iter.next(),
            Err(CollectionError::OutOfBounds { index: 3, len: 3 })
        );
        assert!(iter.current().unwrap_err().is_out_of_bounds());
        assert_eq!(iter.remaining(), 0);
    }

    #[test]
    fn test_reset_replays_snapshot() {
        let mut list: LinkedList<i32> = (1..=3).collect();
        let mut iter = CollectionIterator::new(&list);
        while iter.has_next() {
            iter.next().unwrap();
        }

        list.clear();
        list.add(99);
        iter.reset();

        let mut replay = Vec::new();
        while iter.has_next() {
            replay.push(*iter.next().unwrap());
        }
        assert_eq!(replay, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_collection() {
        let stack: Stack<i32> = Stack::new();
        let mut iter = CollectionIterator::new(&stack);

        assert!(iter.is_empty());
        assert!(!iter.has_next());
        assert!(iter.current().is_err());
        assert!(iter.next().is_err());
    }

    #[test]
    fn test_snapshot_order_per_container() {
        let mut stack = Stack::new();
        stack.push("Page 1");
        stack.push("Page 2");
        let iter = CollectionIterator::new(&stack);
        assert_eq!(iter.current(), Ok(&"Page 1"));

        let mut queue = Queue::new();
        queue.enqueue("Customer 1");
        queue.enqueue("Customer 2");
        queue.dequeue().unwrap();
        let iter = CollectionIterator::new(&queue);
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.current(), Ok(&"Customer 2"));
    }

    #[test]
    fn test_map_iterates_values() {
        let mut map = HashMap::new();
        map.put("nim", "123456");
        map.put("nama", "Budi");

        let mut iter = CollectionIterator::new(&map);
        let mut values = Vec::new();
        while iter.has_next() {
            values.push(*iter.next().unwrap());
        }
        values.sort();
        assert_eq!(values, vec!["123456", "Budi"]);
    }

    #[test]
    fn test_from_trait_object() {
        let list: ArrayList<i32> = (0..4).collect();
        let collection: &dyn Collection<i32> = &list;
        let iter = CollectionIterator::new(collection);

        assert_eq!(iter.len(), 4);
    }
}
