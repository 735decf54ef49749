//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::settings::UserSettings;
use super::validation::{
    UserValidationError, validate_email, validate_first_name, validate_last_name,
};
use crate::domain::contracts::UserId;
use crate::domain::storage::StorageEntity;

/// User entity
///
/// The email is fixed at construction; no method changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    first_name: String,
    last_name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, active user
    pub fn new(
        email: &str,
        first_name: &str,
        last_name: &str,
        settings: &UserSettings,
    ) -> Result<Self, UserValidationError> {
        validate_email(email, settings)?;
        validate_first_name(first_name, settings)?;
        validate_last_name(last_name, settings)?;
        let now = Utc::now();

        Ok(Self {
            id: UserId::new(),
            email: email.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "FirstName LastName"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    // Mutators

    /// Rename the user. Both names are validated before either is applied.
    pub fn rename(
        &mut self,
        first_name: &str,
        last_name: &str,
        settings: &UserSettings,
    ) -> Result<(), UserValidationError> {
        validate_first_name(first_name, settings)?;
        validate_last_name(last_name, settings)?;

        self.first_name = first_name.trim().to_string();
        self.last_name = last_name.trim().to_string();
        self.touch();
        Ok(())
    }

    pub fn deactivate(&mut self) {
        if self.is_active {
            self.is_active = false;
            self.touch();
        }
    }

    pub fn activate(&mut self) {
        if !self.is_active {
            self.is_active = true;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
