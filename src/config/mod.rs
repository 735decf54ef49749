//! Application configuration

mod app_config;
mod provider;

pub use app_config::{AppConfig, ENV_PREFIX, LogFormat, LoggingConfig};
pub use provider::{FileSettingsProvider, StaticSettingsProvider};
