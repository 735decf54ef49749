//! Team validation

use thiserror::Error;

use crate::domain::DomainError;
use crate::domain::contracts::UserId;

/// Errors that can occur while building or mutating a team
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("User '{0}' is already a member of this team")]
    DuplicateMember(UserId),

    #[error("User '{0}' is not a member of this team")]
    NotAMember(UserId),
}

pub const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    let length = name.trim().chars().count();

    if length == 0 {
        return Err(TeamValidationError::EmptyName);
    }

    if length > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

impl From<TeamValidationError> for DomainError {
    fn from(err: TeamValidationError) -> Self {
        match err {
            TeamValidationError::DuplicateMember(_) | TeamValidationError::NotAMember(_) => {
                DomainError::conflict(err.to_string())
            }
            TeamValidationError::EmptyName | TeamValidationError::NameTooLong(_) => {
                DomainError::validation(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("Platform").is_ok());
        assert!(validate_team_name("Team with spaces & symbols!").is_ok());
    }

    #[test]
    fn test_empty_team_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
        assert_eq!(validate_team_name(" \t"), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&long_name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_membership_errors_map_to_conflict() {
        let user_id = UserId::new();

        let err: DomainError = TeamValidationError::DuplicateMember(user_id).into();
        assert!(matches!(err, DomainError::Conflict { .. }));

        let err: DomainError = TeamValidationError::NotAMember(user_id).into();
        assert!(matches!(err, DomainError::Conflict { .. }));

        let err: DomainError = TeamValidationError::EmptyName.into();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
