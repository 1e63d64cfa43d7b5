//! Data structures behind the collection contracts.
//!
//! # Organization
//!
//! - [`collection`] - The base [`Collection`] contract
//! - [`list`] - Index-addressable sequences (ArrayList, LinkedList)
//! - [`linear`] - LIFO and FIFO containers (Stack, Queue)
//! - [`hash`] - Key-value containers (HashMap)
//! - [`collection_iter`] - Snapshot cursor over any collection
//! - `internal` - Implementation details (pub(crate))

// Submodules
pub mod hash;
pub(crate) mod internal;
pub mod linear;
pub mod list;

// Top-level public modules
pub mod collection;
pub mod collection_iter;

pub use collection::Collection;
pub use collection_iter::CollectionIterator;
pub use hash::{HashMap, MapCollection};
pub use linear::{Queue, QueueCollection, Stack, StackCollection};
pub use list::{ArrayList, LinkedList, ListCollection};
