//! Issue entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{IssuePriority, IssueStatus};
use super::validation::{IssueValidationError, validate_issue_title};
use crate::domain::contracts::{TeamId, UserId};
use crate::domain::id::define_id;
use crate::domain::storage::StorageEntity;

define_id!(
    /// Identifier of an issue
    IssueId,
    "issue ID"
);

/// Issue entity
///
/// `resolved_at` is set exactly while `status` is `Resolved`. Assignees are
/// weak references whose existence is checked by the issue service, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    priority: IssuePriority,
    status: IssueStatus,
    assigned_user_id: Option<UserId>,
    assigned_team_id: Option<TeamId>,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    resolved_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

impl Issue {
    /// Create a new open, unassigned issue
    pub fn new(
        title: &str,
        description: Option<&str>,
        priority: IssuePriority,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Self, IssueValidationError> {
        validate_issue_title(title)?;
        let now = Utc::now();

        Ok(Self {
            id: IssueId::new(),
            title: title.trim().to_string(),
            description: normalize_description(description),
            priority,
            status: IssueStatus::Open,
            assigned_user_id: None,
            assigned_team_id: None,
            created_at: now,
            due_date,
            resolved_at: None,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn priority(&self) -> IssuePriority {
        self.priority
    }

    pub fn status(&self) -> IssueStatus {
        self.status
    }

    pub fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }

    pub fn assigned_team_id(&self) -> Option<TeamId> {
        self.assigned_team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Replace the editable details of the issue
    pub fn update_details(
        &mut self,
        title: &str,
        description: Option<&str>,
        priority: IssuePriority,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<(), IssueValidationError> {
        validate_issue_title(title)?;

        self.title = title.trim().to_string();
        self.description = normalize_description(description);
        self.priority = priority;
        self.due_date = due_date;
        self.touch();
        Ok(())
    }

    /// Move the issue to `status`
    ///
    /// Entering `Resolved` stamps `resolved_at` unless it is already set;
    /// moving to any other status clears it.
    pub fn change_status(&mut self, status: IssueStatus) {
        let now = Utc::now();

        if status.is_resolved() {
            self.resolved_at.get_or_insert(now);
        } else {
            self.resolved_at = None;
        }

        self.status = status;
        self.updated_at = now;
    }

    /// Assign to a user, or clear the user assignment with `None`
    pub fn assign_to_user(&mut self, user_id: Option<UserId>) {
        self.assigned_user_id = user_id;
        self.touch();
    }

    /// Assign to a team, or clear the team assignment with `None`
    pub fn assign_to_team(&mut self, team_id: Option<TeamId>) {
        self.assigned_team_id = team_id;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

impl StorageEntity for Issue {
    type Key = IssueId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn login_bug() -> Issue {
        Issue::new(
            "Bug in login",
            Some("Users cannot login"),
            IssuePriority::High,
            Some(Utc::now() + Duration::days(7)),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_creation() {
        let issue = login_bug();

        assert_eq!(issue.title(), "Bug in login");
        assert_eq!(issue.description(), Some("Users cannot login"));
        assert_eq!(issue.priority(), IssuePriority::High);
        assert_eq!(issue.status(), IssueStatus::Open);
        assert!(issue.assigned_user_id().is_none());
        assert!(issue.assigned_team_id().is_none());
        assert!(issue.resolved_at().is_none());
        assert!(issue.due_date().is_some());
    }

    #[test]
    fn test_issue_blank_title_rejected() {
        let err = Issue::new("  ", None, IssuePriority::Low, None).unwrap_err();
        assert_eq!(err, IssueValidationError::EmptyTitle);
    }

    #[test]
    fn test_resolving_sets_and_reopening_clears_resolved_at() {
        let mut issue = login_bug();

        issue.change_status(IssueStatus::Resolved);
        assert!(issue.resolved_at().is_some());

        issue.change_status(IssueStatus::InProgress);
        assert!(issue.resolved_at().is_none());
        assert_eq!(issue.status(), IssueStatus::InProgress);
    }

    #[test]
    fn test_resolving_twice_keeps_first_timestamp() {
        let mut issue = login_bug();

        issue.change_status(IssueStatus::Resolved);
        let first = issue.resolved_at();

        std::thread::sleep(std::time::Duration::from_millis(5));
        issue.change_status(IssueStatus::Resolved);

        assert_eq!(issue.resolved_at(), first);
    }

    #[test]
    fn test_closing_clears_resolved_at() {
        let mut issue = login_bug();

        issue.change_status(IssueStatus::Resolved);
        issue.change_status(IssueStatus::Closed);

        assert!(issue.resolved_at().is_none());
    }

    #[test]
    fn test_resolved_at_tracks_latest_status_for_every_sequence() {
        // every ordered pair of transitions, starting from Open
        for first in IssueStatus::ALL {
            for second in IssueStatus::ALL {
                let mut issue = login_bug();
                issue.change_status(first);
                issue.change_status(second);

                assert_eq!(
                    issue.resolved_at().is_some(),
                    second == IssueStatus::Resolved,
                    "{first} -> {second}"
                );
            }
        }
    }

    #[test]
    fn test_status_change_updates_modified_date() {
        let mut issue = login_bug();
        let before = issue.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(5));
        issue.change_status(IssueStatus::Blocked);

        assert!(issue.updated_at() > before);
    }

    #[test]
    fn test_assignment_and_clearing() {
        let mut issue = login_bug();
        let user_id = UserId::new();
        let team_id = TeamId::new();

        issue.assign_to_user(Some(user_id));
        issue.assign_to_team(Some(team_id));
        assert_eq!(issue.assigned_user_id(), Some(user_id));
        assert_eq!(issue.assigned_team_id(), Some(team_id));

        issue.assign_to_user(None);
        assert!(issue.assigned_user_id().is_none());
        assert_eq!(issue.assigned_team_id(), Some(team_id));
    }

    #[test]
    fn test_update_details_rejects_blank_title() {
        let mut issue = login_bug();

        let err = issue
            .update_details("", None, IssuePriority::Low, None)
            .unwrap_err();
        assert_eq!(err, IssueValidationError::EmptyTitle);
        assert_eq!(issue.title(), "Bug in login");
        assert_eq!(issue.priority(), IssuePriority::High);

        issue
            .update_details("Login fails on Safari", None, IssuePriority::Critical, None)
            .unwrap();
        assert_eq!(issue.title(), "Login fails on Safari");
        assert!(issue.description().is_none());
        assert!(issue.due_date().is_none());
    }
}
