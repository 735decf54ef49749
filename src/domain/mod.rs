//! Domain layer - Entities, invariants and the ports around them

pub mod contracts;
pub mod error;
pub(crate) mod id;
pub mod issue;
pub mod storage;
pub mod team;
pub mod user;

pub use contracts::{TeamContractPort, TeamId, UserContractPort, UserId, UserSummary};
pub use error::{DomainError, ErrorKind};
pub use storage::{Storage, StorageEntity, StorageKey};
