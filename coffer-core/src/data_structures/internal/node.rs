/// Owned link to the next node; `None` marks the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A singly-linked cell used by `LinkedList`.
///
/// The node owns its element and the rest of the chain behind it.
///
#[derive(Debug)]
pub(crate) struct Node<T> {
    data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Node { data, next: None }
    }

    pub(crate) fn with_next(data: T, next: Link<T>) -> Self {
        Node { data, next }
    }

    #[inline]
    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consume the node, handing back its element and detached tail.
    pub(crate) fn into_parts(self) -> (T, Link<T>) {
        (self.data, self.next)
    }
}
