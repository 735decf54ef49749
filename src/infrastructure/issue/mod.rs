//! Issue infrastructure implementations

mod repository;
mod service;

pub use repository::StorageIssueRepository;
pub use service::{CreateIssueRequest, IssueService, UpdateIssueRequest};
