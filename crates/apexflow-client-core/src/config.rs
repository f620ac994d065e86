use apexflow_shared::const_config::client::{
    CLIENT_DEFAULT_API_PREFIX, CLIENT_DEFAULT_BASE_URL, CLIENT_DEFAULT_TIMEOUT_MS,
};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::{collections::BTreeMap, path::Path, time::Duration};

/// Everything needed to reach the backend. This is the only place the backend
/// origin is configured
#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin plus context path, for example `http://localhost:8080/ApexFlow`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(
        default = "default_timeout_ms",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub timeout_ms: u64,
    /// Sent with every request in addition to the JSON content type
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// Directory used to persist the session between runs
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
}

fn default_base_url() -> String {
    CLIENT_DEFAULT_BASE_URL.to_string()
}

fn default_api_prefix() -> String {
    CLIENT_DEFAULT_API_PREFIX.to_string()
}

fn default_timeout_ms() -> u64 {
    CLIENT_DEFAULT_TIMEOUT_MS
}

fn default_storage_dir() -> String {
    ".apexflow".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            timeout_ms: default_timeout_ms(),
            default_headers: Default::default(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
        }
    }
}

impl ClientConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base that every endpoint path is appended to
    pub fn api_base_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_prefix.trim_end_matches('/')
        )
    }
}

/// Loads `base.toml`, then the file for the current environment, then
/// environment variables from `configuration_directory`. Missing files are
/// skipped so the defaults apply.
pub fn get_configuration(configuration_directory: &Path) -> Result<Configuration, config::ConfigError> {
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    get_configuration_for(configuration_directory, environment)
}

pub fn get_configuration_for(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Configuration, config::ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(
            config::File::from(configuration_directory.join("base.toml")).required(false),
        )
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_CLIENT__TIMEOUT_MS=5000 would set `Configuration.client.timeout_ms`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
