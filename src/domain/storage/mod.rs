//! Storage port
//!
//! Every area persists its entity through [`Storage`]; repositories wrap it
//! and own the area specific rules.

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::{Predicate, Storage};

#[cfg(test)]
pub use repository::unavailable::UnavailableStorage;
