//! Ticketing core
//!
//! Users, teams and issues as three areas that only see each other through
//! contract ports:
//! - Users validated against hot-reloadable settings
//! - Teams whose members must exist as users
//! - Issues with a status workflow and user or team assignees

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::app::TicketingServices;
pub use crate::config::AppConfig;
pub use crate::domain::{DomainError, ErrorKind};
pub use crate::infrastructure::logging::init_logging;
