//! Issue service - status workflow and cross-area assignment

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::contracts::{TeamContractPort, TeamId, UserContractPort, UserId};
use crate::domain::issue::{
    Issue, IssueId, IssuePriority, IssueQuery, IssueRepository, IssueStatus,
};

/// Request for creating a new issue
#[derive(Debug, Clone)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: IssuePriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// Request for replacing an issue's details
#[derive(Debug, Clone)]
pub struct UpdateIssueRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: IssuePriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// Issue service
///
/// Assignees are checked through the user and team contract ports. The check
/// is a point-in-time read: nothing stops the referenced user or team from
/// disappearing right after it.
pub struct IssueService<R: IssueRepository> {
    repository: Arc<R>,
    users: Arc<dyn UserContractPort>,
    teams: Arc<dyn TeamContractPort>,
}

impl<R: IssueRepository> std::fmt::Debug for IssueService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueService")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl<R: IssueRepository> IssueService<R> {
    /// Create a new issue service
    pub fn new(
        repository: Arc<R>,
        users: Arc<dyn UserContractPort>,
        teams: Arc<dyn TeamContractPort>,
    ) -> Self {
        Self {
            repository,
            users,
            teams,
        }
    }

    /// Create a new open, unassigned issue
    pub async fn create(&self, request: CreateIssueRequest) -> Result<Issue, DomainError> {
        info!(title = %request.title, priority = %request.priority, "Creating issue");

        let issue = Issue::new(
            &request.title,
            request.description.as_deref(),
            request.priority,
            request.due_date,
        )?;

        self.repository.create(issue).await
    }

    /// Get an issue by ID
    pub async fn get(&self, id: IssueId) -> Result<Issue, DomainError> {
        debug!(%id, "Fetching issue");

        self.repository
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Issue '{}' not found", id)))
    }

    /// List issues matching a query
    pub async fn list(&self, query: Option<IssueQuery>) -> Result<Vec<Issue>, DomainError> {
        self.repository.list(&query.unwrap_or_default()).await
    }

    /// Replace title, description, priority and due date
    pub async fn update(
        &self,
        id: IssueId,
        request: UpdateIssueRequest,
    ) -> Result<Issue, DomainError> {
        info!(%id, "Updating issue");

        let mut issue = self.get(id).await?;

        issue
            .update_details(
                &request.title,
                request.description.as_deref(),
                request.priority,
                request.due_date,
            )?;

        self.repository.update(issue).await
    }

    /// Move an issue to a new status
    pub async fn update_status(
        &self,
        id: IssueId,
        status: IssueStatus,
    ) -> Result<Issue, DomainError> {
        let mut issue = self.get(id).await?;
        info!(%id, from = %issue.status(), to = %status, "Changing issue status");

        issue.change_status(status);

        self.repository.update(issue).await
    }

    /// Assign an issue to a user, or clear the assignment with `None`
    pub async fn assign_to_user(
        &self,
        id: IssueId,
        user_id: Option<UserId>,
    ) -> Result<Issue, DomainError> {
        info!(%id, user_id = ?user_id, "Assigning issue to user");

        let mut issue = self.get(id).await?;

        if let Some(user_id) = user_id {
            if !self.users.exists(user_id).await? {
                warn!(%id, %user_id, "Rejected assignment to unknown user");
                return Err(DomainError::cross_reference(format!(
                    "User '{}' does not exist",
                    user_id
                )));
            }
        }

        issue.assign_to_user(user_id);

        self.repository.update(issue).await
    }

    /// Assign an issue to a team, or clear the assignment with `None`
    pub async fn assign_to_team(
        &self,
        id: IssueId,
        team_id: Option<TeamId>,
    ) -> Result<Issue, DomainError> {
        info!(%id, team_id = ?team_id, "Assigning issue to team");

        let mut issue = self.get(id).await?;

        if let Some(team_id) = team_id {
            if !self.teams.exists(team_id).await? {
                warn!(%id, %team_id, "Rejected assignment to unknown team");
                return Err(DomainError::cross_reference(format!(
                    "Team '{}' does not exist",
                    team_id
                )));
            }
        }

        issue.assign_to_team(team_id);

        self.repository.update(issue).await
    }

    /// Delete an issue
    pub async fn delete(&self, id: IssueId) -> Result<(), DomainError> {
        info!(%id, "Deleting issue");

        if !self.repository.delete(&id).await? {
            return Err(DomainError::not_found(format!("Issue '{}' not found", id)));
        }

        Ok(())
    }
}
