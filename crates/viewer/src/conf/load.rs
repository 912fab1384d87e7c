//! Load: config loading from file and environment variables.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use super::model::ViewerConfig;

pub const CONFIG_FILE_ENV: &str = "VIEWER_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "viewer.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ViewerConfig {
    /// Load configuration from file, then apply environment overrides.
    /// Priority: Environment Variables > Config File > Defaults
    ///
    /// `explicit_path` (e.g. from the command line) wins over `VIEWER_CONFIG_FILE`
    /// and must exist; the implicit default path is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                Self::from_file(path)?
            }
            None => {
                let config_path = std::env::var(CONFIG_FILE_ENV)
                    .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
                if Path::new(&config_path).exists() {
                    tracing::info!("Loading configuration from: {}", config_path);
                    Self::from_file(Path::new(&config_path))?
                } else {
                    tracing::debug!("Config file not found at {}, using defaults", config_path);
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: ViewerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply `VIEWER_*` overrides read through `lookup`. Unparseable values
    /// are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("VIEWER_BASE_URL") {
            self.base_url = url;
        }
        if let Some(hours) = parse_override(&lookup, "VIEWER_DEFAULT_HOURS") {
            self.translation.hours = hours;
        }
        if let Some(limit) = parse_override(&lookup, "VIEWER_DEFAULT_LIMIT") {
            self.translation.limit = limit;
        }
        if let Some(secs) = parse_override(&lookup, "VIEWER_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(color) = parse_override(&lookup, "VIEWER_COLOR") {
            self.color = color;
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_override<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable config override");
            None
        }
    }
}
