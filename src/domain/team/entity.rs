//! Team entity

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::{TeamMember, TeamRole};
use super::validation::{TeamValidationError, validate_team_name};
use crate::domain::contracts::{TeamId, UserId};
use crate::domain::storage::StorageEntity;

/// Team entity
///
/// A user appears at most once in `members`. Only [`Team::add_member`] and
/// [`Team::remove_member`] change who is in the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    members: Vec<TeamMember>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team without members
    pub fn new(name: &str, description: Option<&str>) -> Result<Self, TeamValidationError> {
        validate_team_name(name)?;
        let now = Utc::now();

        Ok(Self {
            id: TeamId::new(),
            name: name.trim().to_string(),
            description: normalize_description(description),
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn member(&self, user_id: UserId) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.user_id() == user_id)
    }

    pub fn has_member(&self, user_id: UserId) -> bool {
        self.member(user_id).is_some()
    }

    pub fn member_ids(&self) -> HashSet<UserId> {
        self.members.iter().map(|m| m.user_id()).collect()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Replace name and description
    pub fn update_details(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), TeamValidationError> {
        validate_team_name(name)?;

        self.name = name.trim().to_string();
        self.description = normalize_description(description);
        self.touch();
        Ok(())
    }

    /// Add a user to the team
    pub fn add_member(
        &mut self,
        user_id: UserId,
        role: TeamRole,
    ) -> Result<&TeamMember, TeamValidationError> {
        if self.has_member(user_id) {
            return Err(TeamValidationError::DuplicateMember(user_id));
        }

        self.members.push(TeamMember::new(user_id, role));
        self.touch();

        Ok(&self.members[self.members.len() - 1])
    }

    /// Remove a user from the team, returning the removed membership
    pub fn remove_member(&mut self, user_id: UserId) -> Result<TeamMember, TeamValidationError> {
        let index = self
            .members
            .iter()
            .position(|m| m.user_id() == user_id)
            .ok_or(TeamValidationError::NotAMember(user_id))?;

        let removed = self.members.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Change the role of an existing member
    pub fn change_member_role(
        &mut self,
        user_id: UserId,
        role: TeamRole,
    ) -> Result<(), TeamValidationError> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.user_id() == user_id)
            .ok_or(TeamValidationError::NotAMember(user_id))?;

        member.set_role(role);
        self.touch();
        Ok(())
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

impl StorageEntity for Team {
    type Key = TeamId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Team {
        Team::new("Platform", Some("Core services")).unwrap()
    }

    #[test]
    fn test_team_creation() {
        let team = platform();

        assert_eq!(team.name(), "Platform");
        assert_eq!(team.description(), Some("Core services"));
        assert!(team.members().is_empty());
    }

    #[test]
    fn test_team_blank_description_is_none() {
        let team = Team::new("Platform", Some("   ")).unwrap();
        assert!(team.description().is_none());
    }

    #[test]
    fn test_team_invalid_name() {
        assert_eq!(Team::new("", None).unwrap_err(), TeamValidationError::EmptyName);
        assert_eq!(Team::new("  ", None).unwrap_err(), TeamValidationError::EmptyName);
    }

    #[test]
    fn test_add_member() {
        let mut team = platform();
        let user_id = UserId::new();

        let member = team.add_member(user_id, TeamRole::Lead).unwrap();
        assert_eq!(member.user_id(), user_id);
        assert_eq!(member.role(), TeamRole::Lead);

        assert!(team.has_member(user_id));
        assert_eq!(team.member_ids(), HashSet::from([user_id]));
    }

    #[test]
    fn test_add_member_twice_conflicts() {
        let mut team = platform();
        let user_id = UserId::new();

        team.add_member(user_id, TeamRole::Lead).unwrap();
        let err = team.add_member(user_id, TeamRole::Member).unwrap_err();

        assert_eq!(err, TeamValidationError::DuplicateMember(user_id));
        assert_eq!(team.members().len(), 1);
        assert_eq!(team.member(user_id).unwrap().role(), TeamRole::Lead);
    }

    #[test]
    fn test_remove_member() {
        let mut team = platform();
        let user_id = UserId::new();
        team.add_member(user_id, TeamRole::Member).unwrap();

        let removed = team.remove_member(user_id).unwrap();
        assert_eq!(removed.user_id(), user_id);
        assert!(team.members().is_empty());
    }

    #[test]
    fn test_remove_non_member() {
        let mut team = platform();
        let stranger = UserId::new();
        team.add_member(UserId::new(), TeamRole::Member).unwrap();

        let err = team.remove_member(stranger).unwrap_err();
        assert_eq!(err, TeamValidationError::NotAMember(stranger));
        assert_eq!(team.members().len(), 1);
    }

    #[test]
    fn test_change_member_role() {
        let mut team = platform();
        let user_id = UserId::new();
        team.add_member(user_id, TeamRole::Member).unwrap();

        team.change_member_role(user_id, TeamRole::Owner).unwrap();
        assert_eq!(team.member(user_id).unwrap().role(), TeamRole::Owner);

        let stranger = UserId::new();
        assert_eq!(
            team.change_member_role(stranger, TeamRole::Lead).unwrap_err(),
            TeamValidationError::NotAMember(stranger)
        );
    }

    #[test]
    fn test_update_details() {
        let mut team = platform();
        let original_updated = team.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        team.update_details("Infrastructure", None).unwrap();
        assert_eq!(team.name(), "Infrastructure");
        assert!(team.description().is_none());
        assert!(team.updated_at() > original_updated);

        assert!(team.update_details("", Some("x")).is_err());
        assert_eq!(team.name(), "Infrastructure");
    }
}
