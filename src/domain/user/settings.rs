//! Settings consumed by user validation

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Snapshot of the user validation settings
///
/// Services fetch a fresh snapshot from a [`SettingsProvider`] on every
/// operation, so changes to the underlying configuration apply to the next
/// call without a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub min_first_name_length: usize,
    pub max_first_name_length: usize,
    pub min_last_name_length: usize,
    pub max_last_name_length: usize,
    /// Comma-separated list of accepted email domains. Empty means any domain.
    pub allowed_email_domains: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            min_first_name_length: 1,
            max_first_name_length: 50,
            min_last_name_length: 1,
            max_last_name_length: 50,
            allowed_email_domains: String::new(),
        }
    }
}

impl UserSettings {
    /// Restrict email addresses to the given domains
    pub fn with_allowed_email_domains(mut self, domains: impl Into<String>) -> Self {
        self.allowed_email_domains = domains.into();
        self
    }

    pub fn with_first_name_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_first_name_length = min;
        self.max_first_name_length = max;
        self
    }

    pub fn with_last_name_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_last_name_length = min;
        self.max_last_name_length = max;
        self
    }

    /// Parsed allow-list, lowercased. Empty when every domain is accepted.
    pub fn allowed_domains(&self) -> Vec<String> {
        self.allowed_email_domains
            .split(',')
            .map(|d| d.trim().to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect()
    }

    /// Reject settings that no input could ever satisfy
    pub fn check(&self) -> Result<(), DomainError> {
        if self.min_first_name_length > self.max_first_name_length {
            return Err(DomainError::configuration(format!(
                "min_first_name_length ({}) exceeds max_first_name_length ({})",
                self.min_first_name_length, self.max_first_name_length
            )));
        }

        if self.min_last_name_length > self.max_last_name_length {
            return Err(DomainError::configuration(format!(
                "min_last_name_length ({}) exceeds max_last_name_length ({})",
                self.min_last_name_length, self.max_last_name_length
            )));
        }

        Ok(())
    }
}

/// Source of the current user settings
pub trait SettingsProvider: Send + Sync + Debug {
    /// Returns the settings in effect right now
    fn user_settings(&self) -> Result<UserSettings, DomainError>;
}
