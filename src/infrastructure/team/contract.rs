//! Team area implementation of the team contract port

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use super::service::TeamService;
use crate::domain::DomainError;
use crate::domain::contracts::{TeamContractPort, TeamId, UserId};
use crate::domain::team::TeamRepository;

/// Adapter answering other areas' questions about teams by delegating to
/// the [`TeamService`]
#[derive(Debug)]
pub struct TeamContractAdapter<R: TeamRepository> {
    service: Arc<TeamService<R>>,
}

impl<R: TeamRepository> TeamContractAdapter<R> {
    pub fn new(service: Arc<TeamService<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: TeamRepository + 'static> TeamContractPort for TeamContractAdapter<R> {
    async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        self.service.exists(id).await
    }

    async fn get_member_ids(&self, id: TeamId) -> Result<HashSet<UserId>, DomainError> {
        self.service.get_member_ids(id).await
    }
}
