//! Reusable contract test suites.
//!
//! Each function is generic over a contract trait, so integration tests can run
//! the same suite against every implementation of that contract.
