//! Cross-area contracts
//!
//! Team and issue code observe other areas exclusively through the traits
//! in this module. Holding a `UserId` or `TeamId` is a weak reference: it
//! names an entity owned elsewhere and is only known to be valid at the
//! moment a port confirmed it.

mod ids;
mod team;
mod user;

pub use ids::{TeamId, UserId};
pub use team::TeamContractPort;
pub use user::{UserContractPort, UserSummary};

#[cfg(test)]
pub use team::MockTeamContractPort;
#[cfg(test)]
pub use user::MockUserContractPort;
