//! Issue repository trait

use async_trait::async_trait;

use super::entity::{Issue, IssueId};
use super::status::{IssuePriority, IssueStatus};
use crate::domain::DomainError;
use crate::domain::contracts::{TeamId, UserId};

#[cfg(test)]
use mockall::automock;

/// Query parameters for listing issues
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub assigned_user_id: Option<UserId>,
    pub assigned_team_id: Option<TeamId>,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Offset for pagination
    pub offset: Option<usize>,
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: IssuePriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assigned_user(mut self, user_id: UserId) -> Self {
        self.assigned_user_id = Some(user_id);
        self
    }

    pub fn with_assigned_team(mut self, team_id: TeamId) -> Self {
        self.assigned_team_id = Some(team_id);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Whether an issue passes the filters (pagination is not considered)
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.is_none_or(|s| issue.status() == s)
            && self.priority.is_none_or(|p| issue.priority() == p)
            && self
                .assigned_user_id
                .is_none_or(|u| issue.assigned_user_id() == Some(u))
            && self
                .assigned_team_id
                .is_none_or(|t| issue.assigned_team_id() == Some(t))
    }
}

/// Persistence port for issues
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IssueRepository: Send + Sync + std::fmt::Debug {
    /// Get an issue by ID
    async fn get(&self, id: &IssueId) -> Result<Option<Issue>, DomainError>;

    /// Store a new issue
    async fn create(&self, issue: Issue) -> Result<Issue, DomainError>;

    /// Replace an existing issue
    async fn update(&self, issue: Issue) -> Result<Issue, DomainError>;

    /// Delete an issue by ID, returns false when it was not stored
    async fn delete(&self, id: &IssueId) -> Result<bool, DomainError>;

    /// List issues matching the query, oldest first
    async fn list(&self, query: &IssueQuery) -> Result<Vec<Issue>, DomainError>;

    /// Check if an issue exists
    async fn exists(&self, id: &IssueId) -> Result<bool, DomainError>;
}
