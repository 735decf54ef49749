//! Composition root
//!
//! Wires the three areas together. Team and issue services only ever receive
//! the contract adapters, never the user or team services themselves.

use std::sync::Arc;

use tracing::info;

use crate::config::{AppConfig, StaticSettingsProvider};
use crate::domain::contracts::{TeamContractPort, UserContractPort};
use crate::domain::issue::Issue;
use crate::domain::team::Team;
use crate::domain::user::{SettingsProvider, User};
use crate::infrastructure::issue::{IssueService, StorageIssueRepository};
use crate::infrastructure::storage::InMemoryStorage;
use crate::infrastructure::team::{StorageTeamRepository, TeamContractAdapter, TeamService};
use crate::infrastructure::user::{StorageUserRepository, UserContractAdapter, UserService};

/// The wired services of the ticketing core
#[derive(Clone)]
pub struct TicketingServices {
    pub users: Arc<UserService<StorageUserRepository>>,
    pub teams: Arc<TeamService<StorageTeamRepository>>,
    pub issues: Arc<IssueService<StorageIssueRepository>>,
    pub user_contract: Arc<dyn UserContractPort>,
    pub team_contract: Arc<dyn TeamContractPort>,
}

impl std::fmt::Debug for TicketingServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketingServices")
            .field("users", &self.users)
            .field("teams", &self.teams)
            .field("issues", &self.issues)
            .finish_non_exhaustive()
    }
}

impl TicketingServices {
    /// Build every service on top of in-memory storage
    pub fn in_memory(settings: Arc<dyn SettingsProvider>) -> Self {
        info!("Using in-memory storage for users, teams and issues");

        let user_repository = Arc::new(StorageUserRepository::new(Arc::new(
            InMemoryStorage::<User>::new(),
        )));
        let team_repository = Arc::new(StorageTeamRepository::new(Arc::new(
            InMemoryStorage::<Team>::new(),
        )));
        let issue_repository = Arc::new(StorageIssueRepository::new(Arc::new(
            InMemoryStorage::<Issue>::new(),
        )));

        let users = Arc::new(UserService::new(user_repository, settings));
        let user_contract: Arc<dyn UserContractPort> =
            Arc::new(UserContractAdapter::new(users.clone()));

        let teams = Arc::new(TeamService::new(team_repository, user_contract.clone()));
        let team_contract: Arc<dyn TeamContractPort> =
            Arc::new(TeamContractAdapter::new(teams.clone()));

        let issues = Arc::new(IssueService::new(
            issue_repository,
            user_contract.clone(),
            team_contract.clone(),
        ));

        Self {
            users,
            teams,
            issues,
            user_contract,
            team_contract,
        }
    }

    /// Build in-memory services using the user settings from a loaded config
    pub fn from_config(config: &AppConfig) -> Self {
        let settings = StaticSettingsProvider::new(config.users.clone());
        Self::in_memory(Arc::new(settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contracts::UserId;
    use crate::domain::user::UserSettings;
    use crate::infrastructure::user::CreateUserRequest;

    #[tokio::test]
    async fn test_contract_sees_users_created_through_service() {
        let services = TicketingServices::from_config(&AppConfig::default());

        let user = services
            .users
            .create(CreateUserRequest {
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await
            .unwrap();

        assert!(services.user_contract.exists(user.id()).await.unwrap());
        assert!(!services.user_contract.exists(UserId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn test_settings_provider_is_shared() {
        let provider = Arc::new(StaticSettingsProvider::new(UserSettings::default()));
        let services = TicketingServices::in_memory(provider.clone());

        provider
            .replace(UserSettings::default().with_allowed_email_domains("corp.example"))
            .unwrap();

        let result = services
            .users
            .create(CreateUserRequest {
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await;

        assert!(result.is_err());
    }
}
