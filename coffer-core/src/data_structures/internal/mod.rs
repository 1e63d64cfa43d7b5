//! Internal implementation details.
//!
//! These are pub(crate) and not intended for external use.

pub mod node;

pub(crate) use node::{Link, Node};
