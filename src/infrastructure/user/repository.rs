//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::contracts::UserId;
use crate::domain::storage::Storage;
use crate::domain::user::{User, UserRepository};

/// Storage-backed implementation of UserRepository
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        self.storage.get_many(ids).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let matches = self.storage.find(&|u: &User| u.has_email(email)).await?;
        Ok(matches.into_iter().next())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.get_by_email(user.email()).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "A user with email '{}' already exists",
                user.email()
            )));
        }

        self.storage.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        if !self.storage.exists(&user.id()).await? {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        self.storage.update(user).await
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self, active: Option<bool>) -> Result<Vec<User>, DomainError> {
        let mut users = self
            .storage
            .find(&|u: &User| active.is_none_or(|a| u.is_active() == a))
            .await?;

        users.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(users)
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserSettings;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageUserRepository {
        StorageUserRepository::new(Arc::new(InMemoryStorage::<User>::new()))
    }

    fn user(email: &str) -> User {
        User::new(email, "John", "Doe", &UserSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = create_repo();
        let created = repo.create(user("john@example.com")).await.unwrap();

        let fetched = repo.get(&created.id()).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_duplicate_email_ignores_case() {
        let repo = create_repo();
        repo.create(user("john@example.com")).await.unwrap();

        let result = repo.create(user("JOHN@example.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = create_repo();
        let created = repo.create(user("john@example.com")).await.unwrap();

        let found = repo.get_by_email("John@Example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id()), Some(created.id()));
        assert!(repo.get_by_email("jane@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_many_skips_unknown_ids() {
        let repo = create_repo();
        let a = repo.create(user("a@example.com")).await.unwrap();
        let b = repo.create(user("b@example.com")).await.unwrap();

        let users = repo
            .get_many(&[a.id(), UserId::new(), b.id()])
            .await
            .unwrap();

        let ids: Vec<UserId> = users.iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![a.id(), b.id()]);
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = create_repo();

        let result = repo.update(user("ghost@example.com")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_filters_by_active() {
        let repo = create_repo();
        repo.create(user("a@example.com")).await.unwrap();
        let mut b = repo.create(user("b@example.com")).await.unwrap();
        b.deactivate();
        repo.update(b).await.unwrap();

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
        assert_eq!(repo.list(Some(true)).await.unwrap().len(), 1);
        assert_eq!(repo.list(Some(false)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = create_repo();
        let created = repo.create(user("john@example.com")).await.unwrap();

        assert!(repo.exists(&created.id()).await.unwrap());
        assert!(repo.delete(&created.id()).await.unwrap());
        assert!(!repo.exists(&created.id()).await.unwrap());
    }
}
