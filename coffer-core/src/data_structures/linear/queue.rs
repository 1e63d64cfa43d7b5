use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::data_structures::{Collection, QueueCollection};
use crate::error::{CollectionError, Result};

/// Queue backed by a ring buffer.
///
/// Both `enqueue` and `dequeue` are amortized O(1): removing the head moves the
/// ring's start index instead of shifting the remaining elements.
/// `to_vec` and `iter` yield elements head first.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            elements: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            elements: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> for Queue<T> {
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
        self.elements.iter().cloned().collect()
    }
}

impl<T> QueueCollection<T> for Queue<T> {
    fn enqueue(&mut self, item: T) {
        self.elements.push_back(item);
    }

    fn dequeue(&mut self) -> Result<T> {
        self.elements
            .pop_front()
            .ok_or_else(|| CollectionError::underflow("queue"))
    }

    fn peek(&self) -> Result<&T> {
        self.elements
            .front()
            .ok_or_else(|| CollectionError::underflow("queue"))
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    /// Consumes the queue, yielding elements head first.
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
