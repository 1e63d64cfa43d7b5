//! Containers that only expose one end (LIFO) or both ends (FIFO).

pub mod linear_collection;
pub mod queue;
pub mod stack;

pub use linear_collection::{QueueCollection, StackCollection};
pub use queue::Queue;
pub use stack::Stack;
