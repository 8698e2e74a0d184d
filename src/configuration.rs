use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::convert::{TryFrom, TryInto};
use std::env::var;
use std::fmt;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storefront: StorefrontSettings,
    pub client: ClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontSettings {
    pub base_url: String,
    pub api_version: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Local,
    CI,
    Production,
}

/// Reads the settings from the `configuration` directory of the current
/// working directory, for the environment named by `APP_ENVIRONMENT`
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("failed to determine current directory: {}", e))
    })?;

    let environment: Environment = var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    get_configuration_from(&base_path.join("configuration"), environment)
}

/// Layers `base`, then the environment's own file, then any `APP_*`
/// environment variables (using `__` to separate nested keys)
pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Settings, ConfigError> {
    let mut settings = Config::default();

    settings.merge(File::from(configuration_directory.join("base")).required(true))?;
    settings
        .merge(File::from(configuration_directory.join(environment.as_str())).required(true))?;
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}

impl StorefrontSettings {
    pub fn graphql_url(&self) -> String {
        format!(
            "{}/api/{}/graphql",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

impl ClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::CI => "ci",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ci" => Ok(Self::CI),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment", other)),
        }
    }
}
