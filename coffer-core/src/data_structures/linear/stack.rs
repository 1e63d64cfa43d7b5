use std::slice;

use crate::data_structures::{Collection, StackCollection};
use crate::error::{CollectionError, Result};

/// Stack backed by a contiguous buffer whose tail is the top.
///
/// `push`, `pop` and `peek` are amortized O(1). `to_vec` and `iter` yield
/// elements bottom to top, in push order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns an iterator from the bottom of the stack to the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> for Stack<T> {
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

impl<T> StackCollection<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.elements
            .pop()
            .ok_or_else(|| CollectionError::underflow("stack"))
    }

    fn peek(&self) -> Result<&T> {
        self.elements
            .last()
            .ok_or_else(|| CollectionError::underflow("stack"))
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Push every element in order; the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the stack, yielding elements bottom to top.
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
