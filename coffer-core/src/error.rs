//! Error types for collection operations.
//!
//! Every fallible operation in this crate returns [`Result`]. Errors are
//! contract violations (reading past the end, popping an empty stack) rather
//! than transient failures, so nothing here is retryable. A failed call never
//! mutates the collection it was made on.

use thiserror::Error;

/// Errors raised when a collection operation's precondition does not hold.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Index-based access outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Map lookup with a key that has no entry.
    #[error("key does not exist")]
    KeyNotFound,

    /// Removal or peek on an empty stack or queue.
    #[error("{container} is empty")]
    Underflow { container: &'static str },
}

impl CollectionError {
    /// Builds a [`CollectionError::OutOfBounds`] and records it.
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        tracing::debug!(index, len, "index out of bounds");
        CollectionError::OutOfBounds { index, len }
    }

    pub(crate) fn key_not_found() -> Self {
        tracing::debug!("map key not found");
        CollectionError::KeyNotFound
    }

    pub(crate) fn underflow(container: &'static str) -> Self {
        tracing::debug!(container, "underflow on empty container");
        CollectionError::Underflow { container }
    }

    /// Check if this error is an out-of-range access.
    ///
    /// Missing map keys count as out of range: the key lies outside the
    /// map's current key set.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            CollectionError::OutOfBounds { .. } | CollectionError::KeyNotFound
        )
    }

    /// Check if this error is an underflow on an empty stack or queue.
    pub fn is_underflow(&self) -> bool {
        matches!(self, CollectionError::Underflow { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;
