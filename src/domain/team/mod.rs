//! Team domain module
//!
//! Teams group users. Membership holds user IDs only; whether a user exists
//! is asked through [`crate::domain::contracts::UserContractPort`].

mod entity;
mod member;
mod repository;
mod validation;

pub use entity::Team;
pub use member::{TeamMember, TeamMemberId, TeamRole};
pub use repository::TeamRepository;
pub use validation::{MAX_TEAM_NAME_LENGTH, TeamValidationError, validate_team_name};
