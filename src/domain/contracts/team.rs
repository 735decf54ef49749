//! Contract exposed by the team area

use std::collections::HashSet;

use async_trait::async_trait;

use super::ids::{TeamId, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// The only surface other areas may use to observe teams
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamContractPort: Send + Sync {
    /// Whether a team with this id exists
    async fn exists(&self, id: TeamId) -> Result<bool, DomainError>;

    /// Ids of the users currently in the team. Fails with `NotFound` for an
    /// unknown team.
    async fn get_member_ids(&self, id: TeamId) -> Result<HashSet<UserId>, DomainError>;
}
