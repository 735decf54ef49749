//! Team service for team and membership management

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::contracts::{TeamId, UserContractPort, UserId};
use crate::domain::team::{Team, TeamMember, TeamRepository, TeamRole};

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request for updating a team
#[derive(Debug, Clone)]
pub struct UpdateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Team service
///
/// Membership references users by ID; whether a user exists is asked through
/// the [`UserContractPort`] at the moment a member is added.
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
    users: Arc<dyn UserContractPort>,
}

impl<R: TeamRepository> std::fmt::Debug for TeamService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamService")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>, users: Arc<dyn UserContractPort>) -> Self {
        Self { repository, users }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        info!(name = %request.name, "Creating team");

        let team = Team::new(&request.name, request.description.as_deref())?;

        self.repository.create(team).await
    }

    /// Get a team by ID
    pub async fn get(&self, id: TeamId) -> Result<Team, DomainError> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))
    }

    /// Get a team by ID, `None` if unknown
    pub async fn find(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        debug!(%id, "Fetching team");
        self.repository.get(&id).await
    }

    /// List all teams
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.repository.list().await
    }

    /// Update a team's name and description
    pub async fn update(&self, id: TeamId, request: UpdateTeamRequest) -> Result<Team, DomainError> {
        info!(%id, "Updating team");

        let mut team = self.get(id).await?;
        team.update_details(&request.name, request.description.as_deref())?;

        self.repository.update(team).await
    }

    /// Delete a team
    pub async fn delete(&self, id: TeamId) -> Result<(), DomainError> {
        info!(%id, "Deleting team");

        if !self.repository.delete(&id).await? {
            return Err(DomainError::not_found(format!("Team '{}' not found", id)));
        }

        Ok(())
    }

    /// Add a user to a team
    ///
    /// Fails with `NotFound` for an unknown team, `CrossReference` when the
    /// user does not exist, and `Conflict` when the user is already a member.
    /// The team is left untouched on every failure.
    pub async fn add_member(
        &self,
        team_id: TeamId,
        user_id: UserId,
        role: TeamRole,
    ) -> Result<TeamMember, DomainError> {
        info!(%team_id, %user_id, %role, "Adding team member");

        let mut team = self.get(team_id).await?;

        if !self.users.exists(user_id).await? {
            warn!(%team_id, %user_id, "Rejected membership for unknown user");
            return Err(DomainError::cross_reference(format!(
                "User '{}' does not exist",
                user_id
            )));
        }

        let member = team.add_member(user_id, role)?.clone();
        self.repository.update(team).await?;

        Ok(member)
    }

    /// Remove a user from a team
    pub async fn remove_member(
        &self,
        team_id: TeamId,
        user_id: UserId,
    ) -> Result<TeamMember, DomainError> {
        info!(%team_id, %user_id, "Removing team member");

        let mut team = self.get(team_id).await?;
        let removed = team.remove_member(user_id)?;
        self.repository.update(team).await?;

        Ok(removed)
    }

    /// Change the role of an existing member
    pub async fn change_member_role(
        &self,
        team_id: TeamId,
        user_id: UserId,
        role: TeamRole,
    ) -> Result<Team, DomainError> {
        info!(%team_id, %user_id, %role, "Changing team member role");

        let mut team = self.get(team_id).await?;
        team.change_member_role(user_id, role)?;

        self.repository.update(team).await
    }

    /// Check if a team exists
    pub async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        self.repository.exists(&id).await
    }

    /// IDs of the users in a team
    pub async fn get_member_ids(&self, id: TeamId) -> Result<HashSet<UserId>, DomainError> {
        Ok(self.get(id).await?.member_ids())
    }
}
