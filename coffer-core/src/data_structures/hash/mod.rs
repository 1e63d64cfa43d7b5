//! Associative containers.

pub mod hash_map;
pub mod map_collection;

pub use hash_map::HashMap;
pub use map_collection::MapCollection;
