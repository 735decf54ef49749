//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;
use crate::domain::contracts::UserId;

#[cfg(test)]
use mockall::automock;

/// Persistence port for users
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get every user whose ID is in `ids`; unknown IDs are skipped
    async fn get_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError>;

    /// Find a user by email, ignoring case
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Store a new user; `Conflict` when another user already has the email
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user by ID
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// List users, optionally filtered by active flag
    async fn list(&self, active: Option<bool>) -> Result<Vec<User>, DomainError>;

    /// Check if a user exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
