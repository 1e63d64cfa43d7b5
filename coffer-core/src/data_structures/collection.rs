//! Base contract shared by every container.
//!
//! [`Collection`] is the narrowest capability set: size, emptiness, clearing,
//! membership and snapshotting. The specialized contracts
//! ([`ListCollection`](super::ListCollection),
//! [`QueueCollection`](super::QueueCollection),
//! [`StackCollection`](super::StackCollection),
//! [`MapCollection`](super::MapCollection)) all extend it, so code that only
//! needs to count or snapshot elements can accept any container.

// ============================================================================
// Collection - Base trait for any container
// ============================================================================

/// Trait for containers holding elements of type `T`.
///
/// The trait is object safe, so polymorphic code may take
/// `&dyn Collection<T>`:
///
/// ```rust
/// use coffer_core::data_structures::{ArrayList, Collection, ListCollection, Stack, StackCollection};
///
/// fn describe(collection: &dyn Collection<i32>) -> String {
///     format!("{} element(s): {:?}", collection.len(), collection.to_vec())
/// }
///
/// let mut list = ArrayList::new();
/// list.add(1);
/// list.add(2);
///
/// let mut stack = Stack::new();
/// stack.push(7);
///
/// assert_eq!(describe(&list), "2 element(s): [1, 2]");
/// assert_eq!(describe(&stack), "1 element(s): [7]");
/// ```
///
pub trait Collection<T> {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns true if some element equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq;

    /// Collects all elements into a Vec, in the collection's logical order.
    ///
    /// The Vec is an independent copy: mutating it never affects the
    /// collection, and later mutations of the collection never affect it.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}
