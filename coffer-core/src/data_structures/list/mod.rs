//! Index-addressable sequences.
//!
//! Both implementations satisfy [`ListCollection`] and produce identical
//! results for identical operation sequences; they differ only in cost:
//!
//! - [`ArrayList`]: contiguous buffer, O(1) indexing, O(n) head insert
//! - [`LinkedList`]: owned node chain, O(1) head insert, O(i) indexing

pub mod array_list;
pub mod linked_list;
pub mod list_collection;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;
pub use list_collection::ListCollection;
