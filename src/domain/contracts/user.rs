//! Contract exposed by the user area

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ids::UserId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Minimal read model of a user for consumers outside the user area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub is_active: bool,
}

/// The only surface other areas may use to observe users
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserContractPort: Send + Sync {
    /// Whether a user with this id exists. Inactive users still exist.
    async fn exists(&self, id: UserId) -> Result<bool, DomainError>;

    /// Read accessor for a single user
    async fn get_summary(&self, id: UserId) -> Result<Option<UserSummary>, DomainError>;

    /// Read accessor for several users; unknown ids are skipped
    async fn get_summaries(&self, ids: Vec<UserId>) -> Result<Vec<UserSummary>, DomainError>;
}
