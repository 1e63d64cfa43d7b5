use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::data_structures::internal::{Link, Node};
use crate::data_structures::{Collection, ListCollection};
use crate::error::{CollectionError, Result};

///
/// Singly linked list of owned nodes.
///
/// Every node is reachable from `head` through a chain of `Box` links, so the
/// list exclusively owns its elements and dropping the list drops the chain.
/// `count` is kept alongside the chain and always equals the number of
/// reachable nodes.
///
// =============================================================================
// LIST STRUCTURE
// =============================================================================
//
// ┌──────┐    ┌──────┐    ┌──────┐    ┌──────┐
// │ head │───►│  10  │───►│  20  │───►│  30  │───► None
// └──────┘    └──────┘    └──────┘    └──────┘
//               [0]         [1]         [2]
//
// remove(1): walk to the predecessor at index 0, take its `next` (the node
// holding 20), and store the removed node's own `next` back into it:
//
//   before:  pred(10) ──► curr(20) ──► next(30)
//   after:   pred(10) ─────────────────► next(30)     curr dropped
//
// remove(0) has no predecessor: `head` itself is replaced by `head.next`.
//
// Costs:
//   add_first          O(1)
//   add_last           O(n)  walks to the tail
//   get / set / remove O(i)  walks `i` links
//
// =============================================================================
pub struct LinkedList<T> {
    head: Link<T>,
    count: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            count: 0,
        }
    }

    /// Returns an iterator over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.count,
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Walk `index` links from head.
    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    /// Walk `index` links from head, mutably.
    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// Returns the `None` link after the last node.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }

    /// Detach the head node and return its element.
    fn unlink_head(&mut self) -> Option<T> {
        let head = self.head.take()?;
        let (data, next) = head.into_parts();
        self.head = next;
        self.count -= 1;
        tracing::trace!(index = 0, len = self.count, "unlinked head");
        Some(data)
    }

    /// Splice out the node after the predecessor at `pred_index`.
    ///
    /// Leaves the chain untouched and returns `None` if either node is missing.
    fn unlink_after(&mut self, pred_index: usize) -> Option<T> {
        let pred = self.node_at_mut(pred_index)?;
        let removed = pred.next.take()?;
        let (data, next) = removed.into_parts();
        pred.next = next;
        self.count -= 1;
        tracing::trace!(index = pred_index + 1, len = self.count, "unlinked node");
        Some(data)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> for LinkedList<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        // Unlink one node at a time so long chains don't recurse in Box's drop.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        if self.count > 0 {
            tracing::trace!(released = self.count, "linked list cleared");
        }
        self.count = 0;
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(self.count);
        result.extend(self.iter().cloned());
        result
    }
}

impl<T> ListCollection<T> for LinkedList<T> {
    fn add_first(&mut self, item: T) {
        let old_head = self.head.take();
        self.head = Some(Box::new(Node::with_next(item, old_head)));
        self.count += 1;
    }

    fn add_last(&mut self, item: T) {
        *self.tail_link() = Some(Box::new(Node::new(item)));
        self.count += 1;
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(Node::data)
            .ok_or_else(|| CollectionError::out_of_bounds(index, self.count))
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        let len = self.count;
        let node = self
            .node_at_mut(index)
            .ok_or_else(|| CollectionError::out_of_bounds(index, len))?;
        Ok(mem::replace(node.data_mut(), item))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.count;
        let removed = match index {
            0 => self.unlink_head(),
            _ => self.unlink_after(index - 1),
        };
        removed.ok_or_else(|| CollectionError::out_of_bounds(index, len))
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == item)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Keep a cursor on the tail link so a bulk append walks the chain once.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for item in iter {
            let node = cursor.insert(Box::new(Node::new(item)));
            cursor = &mut node.next;
            self.count += 1;
        }
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`], yielding elements from the head.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.unlink_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.count, Some(self.0.count))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
