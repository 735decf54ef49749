//! Settings providers
//!
//! Services ask a provider for a fresh [`UserSettings`] snapshot on every
//! operation instead of caching one at construction.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use super::app_config::AppConfig;
use crate::domain::DomainError;
use crate::domain::user::{SettingsProvider, UserSettings};

/// In-process settings that can be swapped at runtime
#[derive(Debug, Default)]
pub struct StaticSettingsProvider {
    settings: RwLock<UserSettings>,
}

impl StaticSettingsProvider {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Replace the settings seen by subsequent operations
    pub fn replace(&self, settings: UserSettings) -> Result<(), DomainError> {
        let mut current = self.settings.write().map_err(|e| {
            DomainError::configuration(format!("Failed to acquire settings lock: {}", e))
        })?;
        *current = settings;
        Ok(())
    }
}

impl SettingsProvider for StaticSettingsProvider {
    fn user_settings(&self) -> Result<UserSettings, DomainError> {
        let settings = self.settings.read().map_err(|e| {
            DomainError::configuration(format!("Failed to acquire settings lock: {}", e))
        })?;
        Ok(settings.clone())
    }
}

/// Settings re-read from a configuration file (and the environment) on
/// every call
#[derive(Debug, Clone)]
pub struct FileSettingsProvider {
    path: PathBuf,
}

impl FileSettingsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for FileSettingsProvider {
    fn user_settings(&self) -> Result<UserSettings, DomainError> {
        debug!(path = %self.path.display(), "Reading user settings");

        AppConfig::load_from(&self.path)
            .map(|config| config.users)
            .map_err(|e| DomainError::configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};

    #[test]
    fn test_static_provider_replace() {
        let provider = StaticSettingsProvider::default();
        assert_eq!(provider.user_settings().unwrap(), UserSettings::default());

        let stricter = UserSettings::default().with_first_name_bounds(3, 20);
        provider.replace(stricter.clone()).unwrap();

        assert_eq!(provider.user_settings().unwrap(), stricter);
    }

    #[test]
    fn test_file_provider_picks_up_changes() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[users]\nmin_first_name_length = 2").unwrap();

        let provider = FileSettingsProvider::new(file.path());
        assert_eq!(provider.user_settings().unwrap().min_first_name_length, 2);

        file.as_file_mut().set_len(0).unwrap();
        file.rewind().unwrap();
        writeln!(file, "[users]\nmin_first_name_length = 4").unwrap();
        file.flush().unwrap();

        assert_eq!(provider.user_settings().unwrap().min_first_name_length, 4);
    }

    #[test]
    fn test_file_provider_reports_malformed_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[users]\nmin_first_name_length = \"many\"").unwrap();

        let provider = FileSettingsProvider::new(file.path());
        let err = provider.user_settings().unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }
}
