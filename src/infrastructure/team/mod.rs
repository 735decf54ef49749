//! Team infrastructure implementations

mod contract;
mod repository;
mod service;

pub use contract::TeamContractAdapter;
pub use repository::StorageTeamRepository;
pub use service::{CreateTeamRequest, TeamService, UpdateTeamRequest};
