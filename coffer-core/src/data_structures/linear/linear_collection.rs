use crate::data_structures::Collection;
use crate::error::Result;

// ============================================================================
// StackCollection - LIFO contract
// ============================================================================

/// Last-in, first-out container.
///
/// # Errors
///
/// `pop` and `peek` return
/// [`CollectionError::Underflow`](crate::CollectionError::Underflow) when the
/// stack is empty, and leave it empty.
///
/// # Example
///
/// ```rust
/// use coffer_core::data_structures::{Stack, StackCollection};
///
/// let mut history = Stack::new();
/// history.push("Page 1");
/// history.push("Page 2");
/// history.push("Page 3");
///
/// assert_eq!(history.peek(), Ok(&"Page 3"));
/// assert_eq!(history.pop(), Ok("Page 3"));
/// assert_eq!(history.peek(), Ok(&"Page 2"));
/// ```
///
pub trait StackCollection<T>: Collection<T> {
    /// Put an element on top.
    fn push(&mut self, item: T);

    /// Remove and return the top element.
    fn pop(&mut self) -> Result<T>;

    /// Get the top element without removing it.
    fn peek(&self) -> Result<&T>;
}

// ============================================================================
// QueueCollection - FIFO contract
// ============================================================================

/// First-in, first-out container.
///
/// # Errors
///
/// `dequeue` and `peek` return
/// [`CollectionError::Underflow`](crate::CollectionError::Underflow) when the
/// queue is empty, and leave it empty.
///
/// # Example
///
/// ```rust
/// use coffer_core::data_structures::{Queue, QueueCollection};
///
/// let mut line = Queue::new();
/// line.enqueue("Customer 1");
/// line.enqueue("Customer 2");
///
/// assert_eq!(line.peek(), Ok(&"Customer 1"));
/// assert_eq!(line.dequeue(), Ok("Customer 1"));
/// assert_eq!(line.peek(), Ok(&"Customer 2"));
/// ```
///
pub trait QueueCollection<T>: Collection<T> {
    /// Add an element at the tail.
    fn enqueue(&mut self, item: T);

    /// Remove and return the head element.
    fn dequeue(&mut self) -> Result<T>;

    /// Get the head element without removing it.
    fn peek(&self) -> Result<&T>;
}
