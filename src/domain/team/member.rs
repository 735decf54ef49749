//! Team membership

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::contracts::UserId;
use crate::domain::id::define_id;

define_id!(
    /// Identifier of a single membership record
    TeamMemberId,
    "team member ID"
);

/// Role of a user within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    #[default]
    Member,
    Lead,
    Owner,
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Member => write!(f, "member"),
            Self::Lead => write!(f, "lead"),
            Self::Owner => write!(f, "owner"),
        }
    }
}

/// A user's membership in a team
///
/// `user_id` is a weak reference into the user area; the team never holds
/// the user itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    id: TeamMemberId,
    user_id: UserId,
    role: TeamRole,
    joined_at: DateTime<Utc>,
}

impl TeamMember {
    pub(super) fn new(user_id: UserId, role: TeamRole) -> Self {
        Self {
            id: TeamMemberId::new(),
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TeamMemberId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> TeamRole {
        self.role
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    pub(super) fn set_role(&mut self, role: TeamRole) {
        self.role = role;
    }
}
