//! Handles settings for the application. Configuration is read from an
//! optional `romana.toml` and can be overridden with `ROMANA_*` environment
//! variables (e.g. `ROMANA_APP__LEVEL=debug`).
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level for the env filter (`error`, `warn`, `info`, `debug`, ...).
    pub level: String,
    /// Group description file used when the CLI gets no explicit path.
    pub group_file: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            group_file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
}

impl Settings {
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path.unwrap_or("romana")).required(path.is_some()))
            .add_source(Environment::with_prefix("ROMANA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
