//! User service for user management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::contracts::UserId;
use crate::domain::user::{SettingsProvider, User, UserRepository, UserSettings};

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request for renaming a user
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
}

/// User service
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    settings: Arc<dyn SettingsProvider>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Create a new user
    ///
    /// `Validation` for bad input; the repository answers `Conflict` for a
    /// taken email.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        info!(email = %request.email, "Creating user");

        let settings = self.current_settings()?;

        let user = User::new(
            &request.email,
            &request.first_name,
            &request.last_name,
            &settings,
        )?;

        self.repository.create(user).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// Get a user by ID, `None` if unknown
    pub async fn find(&self, id: UserId) -> Result<Option<User>, DomainError> {
        debug!(%id, "Fetching user");
        self.repository.get(&id).await
    }

    /// Get several users at once; unknown IDs are skipped
    pub async fn get_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        self.repository.get_many(ids).await
    }

    /// Find a user by email, ignoring case
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_email(email).await
    }

    /// List users, optionally only active or inactive ones
    pub async fn list(&self, active: Option<bool>) -> Result<Vec<User>, DomainError> {
        self.repository.list(active).await
    }

    /// Rename a user
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        info!(%id, "Updating user");

        let settings = self.current_settings()?;
        let mut user = self.get(id).await?;

        user.rename(&request.first_name, &request.last_name, &settings)?;

        self.repository.update(user).await
    }

    /// Deactivate a user. Reversible through [`UserService::activate`].
    pub async fn deactivate(&self, id: UserId) -> Result<User, DomainError> {
        info!(%id, "Deactivating user");

        let mut user = self.get(id).await?;
        user.deactivate();

        self.repository.update(user).await
    }

    /// Re-activate a deactivated user
    pub async fn activate(&self, id: UserId) -> Result<User, DomainError> {
        info!(%id, "Activating user");

        let mut user = self.get(id).await?;
        user.activate();

        self.repository.update(user).await
    }

    /// Check if a user exists. Unknown IDs yield `false`, never an error.
    pub async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        self.repository.exists(&id).await
    }

    fn current_settings(&self) -> Result<UserSettings, DomainError> {
        let settings = self.settings.user_settings()?;
        settings.check()?;
        Ok(settings)
    }
}
