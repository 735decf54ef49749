//! Storage-backed issue repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::issue::{Issue, IssueId, IssueQuery, IssueRepository};
use crate::domain::storage::Storage;

/// Storage-backed implementation of IssueRepository
#[derive(Debug)]
pub struct StorageIssueRepository {
    storage: Arc<dyn Storage<Issue>>,
}

impl StorageIssueRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Issue>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl IssueRepository for StorageIssueRepository {
    async fn get(&self, id: &IssueId) -> Result<Option<Issue>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, issue: Issue) -> Result<Issue, DomainError> {
        self.storage.create(issue).await
    }

    async fn update(&self, issue: Issue) -> Result<Issue, DomainError> {
        if !self.storage.exists(&issue.id()).await? {
            return Err(DomainError::not_found(format!(
                "Issue '{}' not found",
                issue.id()
            )));
        }

        self.storage.update(issue).await
    }

    async fn delete(&self, id: &IssueId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self, query: &IssueQuery) -> Result<Vec<Issue>, DomainError> {
        let mut result = self
            .storage
            .find(&|issue: &Issue| query.matches(issue))
            .await?;

        result.sort_by(|a, b| a.created_at().cmp(&b.created_at()));

        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(usize::MAX);

        Ok(result.into_iter().skip(offset).take(limit).collect())
    }

    async fn exists(&self, id: &IssueId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }
}
