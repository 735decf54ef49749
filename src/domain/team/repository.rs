//! Team repository trait

use async_trait::async_trait;

use super::entity::Team;
use crate::domain::DomainError;
use crate::domain::contracts::TeamId;

/// Persistence port for teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Store a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Replace an existing team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Delete a team by ID
    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// List all teams, sorted by name
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError>;
}
