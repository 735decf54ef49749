//! User area implementation of the user contract port

use std::sync::Arc;

use async_trait::async_trait;

use super::service::UserService;
use crate::domain::DomainError;
use crate::domain::contracts::{UserContractPort, UserId, UserSummary};
use crate::domain::user::{User, UserRepository};

/// Adapter answering other areas' questions about users by delegating to
/// the [`UserService`]
#[derive(Debug)]
pub struct UserContractAdapter<R: UserRepository> {
    service: Arc<UserService<R>>,
}

impl<R: UserRepository> UserContractAdapter<R> {
    pub fn new(service: Arc<UserService<R>>) -> Self {
        Self { service }
    }
}

fn summarize(user: &User) -> UserSummary {
    UserSummary {
        id: user.id(),
        display_name: user.display_name(),
        email: user.email().to_string(),
        is_active: user.is_active(),
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserContractPort for UserContractAdapter<R> {
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        self.service.exists(id).await
    }

    async fn get_summary(&self, id: UserId) -> Result<Option<UserSummary>, DomainError> {
        Ok(self.service.find(id).await?.as_ref().map(summarize))
    }

    async fn get_summaries(&self, ids: Vec<UserId>) -> Result<Vec<UserSummary>, DomainError> {
        let users = self.service.get_many(&ids).await?;
        Ok(users.iter().map(summarize).collect())
    }
}
