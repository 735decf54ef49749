use std::path::Path;

use serde::Deserialize;

use crate::domain::user::UserSettings;

/// Prefix of environment variables overriding file configuration,
/// e.g. `TICKETING__USERS__MIN_FIRST_NAME_LENGTH=3`
pub const ENV_PREFIX: &str = "TICKETING";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub users: UserSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and the environment
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from_dir(Path::new("config"))
    }

    /// Load `default` then `local` (any supported extension, both optional)
    /// from `dir`, then the environment on top
    pub fn load_from_dir(dir: &Path) -> Result<Self, ::config::ConfigError> {
        layered(dir, environment())
    }

    /// Load from a single file plus the environment
    pub fn load_from(path: &Path) -> Result<Self, ::config::ConfigError> {
        let config = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(environment())
            .build()?;

        config.try_deserialize()
    }
}

fn layered(dir: &Path, env: ::config::Environment) -> Result<AppConfig, ::config::ConfigError> {
    let config = ::config::Config::builder()
        .add_source(::config::File::from(dir.join("default")).required(false))
        .add_source(::config::File::from(dir.join("local")).required(false))
        .add_source(env)
        .build()?;

    config.try_deserialize()
}

fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
