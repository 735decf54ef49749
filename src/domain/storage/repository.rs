//! Storage port shared by every area's repository

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::{StorageEntity, StorageKey};

/// Filter applied by [`Storage::find`]
pub type Predicate<'a, E> = &'a (dyn Fn(&E) -> bool + Send + Sync);

/// Keyed persistence for a single entity type
///
/// Repositories hold an `Arc<dyn Storage<E>>` and add the area specific
/// rules (uniqueness, ordering, paging) on top.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves the entities for the given keys, skipping unknown keys.
    /// Results follow the order of `keys`.
    async fn get_many(&self, keys: &[E::Key]) -> Result<Vec<E>, DomainError> {
        let mut found = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(entity) = self.get(key).await? {
                found.push(entity);
            }
        }
        Ok(found)
    }

    /// Retrieves all entities, in no particular order
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Retrieves the entities accepted by `predicate`
    async fn find(&self, predicate: Predicate<'_, E>) -> Result<Vec<E>, DomainError> {
        Ok(self.list().await?.into_iter().filter(|e| predicate(e)).collect())
    }

    /// Inserts a new entity; `Conflict` if the key is taken
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Replaces an existing entity; `NotFound` if the key is unknown
    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Deletes an entity by its key, returns true if deleted
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
