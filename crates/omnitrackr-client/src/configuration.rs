use anyhow::Context as _;
use omnitrackr_shared::const_config::{
    session::SESSION_STORAGE_KEY, telemetry::TELEMETRY_DEFAULT_FILTER,
};
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// Folder the session file is written to, relative paths are resolved
    /// against the working directory
    pub directory: PathBuf,
    pub session_key: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LoggingSettings {
    pub app_name: String,
    /// Used when `RUST_LOG` is not set
    pub default_filter: String,
}

/// Loads the settings from the `configuration` folder in the working directory
/// using `APP_ENVIRONMENT` (default `local`) to pick the environment file
pub fn get_configuration() -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir().context("failed to determine the current directory")?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("failed to parse APP_ENVIRONMENT")?;
    get_configuration_in(&base_path.join("configuration"), environment)
        .context("failed to load configuration")
}

/// Every file is optional, missing settings fall back to built in defaults
pub fn get_configuration_in(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Configuration, config::ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .set_default("storage.directory", ".omnitrackr")?
        .set_default("storage.session_key", SESSION_STORAGE_KEY)?
        .set_default("logging.app_name", "omnitrackr")?
        .set_default("logging.default_filter", TELEMETRY_DEFAULT_FILTER)?
        .add_source(config::File::from(configuration_directory.join("base.toml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_STORAGE__DIRECTORY=/tmp/omni` would set `Settings.storage.directory`
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
