//! Model: ViewerConfig and related structs.

use serde::{Deserialize, Serialize};

use crate::source::model::{HOURS_RANGE, LIMIT_RANGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Scheme and host the endpoint paths are resolved against
    pub base_url: String,
    /// Request timeout; unset means no client-side timeout
    pub request_timeout_secs: Option<u64>,
    /// Colorize terminal output
    pub color: bool,
    pub sources: SourcesConfig,
    pub translation: TranslationDefaults,
}

/// Endpoint paths, relative to `base_url` unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub debug: String,
    pub celery: String,
    pub translation: String,
}

/// Query defaults for the translation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationDefaults {
    pub hours: u32,
    pub limit: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: None,
            color: true,
            sources: SourcesConfig::default(),
            translation: TranslationDefaults::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            debug: "/api/logs/debug-log/".to_string(),
            celery: "/api/logs/celery-log/".to_string(),
            translation: "/api/logs/translation-log/".to_string(),
        }
    }
}

impl Default for TranslationDefaults {
    fn default() -> Self {
        Self { hours: 6, limit: 100 }
    }
}

impl ViewerConfig {
    /// Validate that configuration values are sane
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("base_url must start with http:// or https://, got {}", self.base_url));
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be > 0 when set".to_string());
        }
        self.sources.validate()?;
        self.translation.validate()?;
        Ok(())
    }
}

impl SourcesConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, path) in [("debug", &self.debug), ("celery", &self.celery), ("translation", &self.translation)] {
            if path.trim().is_empty() {
                return Err(format!("sources.{} must not be empty", name));
            }
        }
        Ok(())
    }
}

impl TranslationDefaults {
    pub fn validate(&self) -> Result<(), String> {
        if !HOURS_RANGE.contains(&self.hours) {
            return Err(format!(
                "translation.hours must be between {} and {}",
                HOURS_RANGE.start(),
                HOURS_RANGE.end()
            ));
        }
        if !LIMIT_RANGE.contains(&self.limit) {
            return Err(format!(
                "translation.limit must be between {} and {}",
                LIMIT_RANGE.start(),
                LIMIT_RANGE.end()
            ));
        }
        Ok(())
    }
}
