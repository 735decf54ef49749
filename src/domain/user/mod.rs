//! User domain
//!
//! Users own the identity every other area validates against. Other areas
//! reach users only through [`crate::domain::contracts::UserContractPort`].

mod entity;
mod repository;
mod settings;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
#[cfg(test)]
pub use repository::MockUserRepository;
pub use settings::{SettingsProvider, UserSettings};
pub use validation::{
    MAX_EMAIL_LENGTH, UserValidationError, validate_email, validate_first_name,
    validate_last_name,
};
