//! Issue domain module
//!
//! Issues reference users and teams by ID only and validate those references
//! through the contract ports.

mod entity;
mod repository;
mod status;
mod validation;

pub use entity::{Issue, IssueId};
pub use repository::{IssueQuery, IssueRepository};
#[cfg(test)]
pub use repository::MockIssueRepository;
pub use status::{IssuePriority, IssueStatus};
pub use validation::{IssueValidationError, MAX_ISSUE_TITLE_LENGTH, validate_issue_title};
