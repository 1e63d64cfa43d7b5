//! Generic containers behind a shared collection contract.
//!
//! Every container implements [`Collection`](data_structures::Collection);
//! each also implements the specialized contract matching its access pattern:
//!
//! | contract            | implementations            |
//! |---------------------|----------------------------|
//! | `ListCollection`    | `ArrayList`, `LinkedList`  |
//! | `StackCollection`   | `Stack`                    |
//! | `QueueCollection`   | `Queue`                    |
//! | `MapCollection`     | `HashMap`                  |
//!
//! [`CollectionIterator`](data_structures::CollectionIterator) walks a frozen
//! snapshot of any of them.

pub mod common_tests;
pub mod data_structures;
pub mod error;

pub use data_structures::{
    ArrayList, Collection, CollectionIterator, HashMap, LinkedList, ListCollection,
    MapCollection, Queue, QueueCollection, Stack, StackCollection,
};
pub use error::{CollectionError, Result};
