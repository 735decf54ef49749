//! User infrastructure module
//!
//! Storage-backed repository, the user service, and the adapter through
//! which other areas see users.

mod contract;
mod repository;
mod service;

pub use contract::UserContractAdapter;
pub use repository::StorageUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
