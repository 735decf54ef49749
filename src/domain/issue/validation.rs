//! Issue validation

use thiserror::Error;

use crate::domain::DomainError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IssueValidationError {
    #[error("Issue title cannot be empty")]
    EmptyTitle,

    #[error("Issue title cannot exceed {0} characters")]
    TitleTooLong(usize),
}

impl From<IssueValidationError> for DomainError {
    fn from(err: IssueValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

pub const MAX_ISSUE_TITLE_LENGTH: usize = 200;

pub fn validate_issue_title(title: &str) -> Result<(), IssueValidationError> {
    let length = title.trim().chars().count();

    if length == 0 {
        return Err(IssueValidationError::EmptyTitle);
    }

    if length > MAX_ISSUE_TITLE_LENGTH {
        return Err(IssueValidationError::TitleTooLong(MAX_ISSUE_TITLE_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_title_rules() {
        assert!(validate_issue_title("Bug in login").is_ok());
        assert_eq!(
            validate_issue_title("   "),
            Err(IssueValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_issue_title(&"x".repeat(201)),
            Err(IssueValidationError::TitleTooLong(200))
        );
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: DomainError = IssueValidationError::EmptyTitle.into();
        assert_eq!(err, DomainError::validation("Issue title cannot be empty"));
    }
}
