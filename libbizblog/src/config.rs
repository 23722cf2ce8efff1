//! Configuration management for BizBlog

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::Author;
use crate::view::PaginationPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub blog: BlogConfig,
    /// Overrides the seeded author when present
    pub author: Option<Author>,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Site name shown in the header
    pub title: String,
    pub page_size: usize,
    pub popular_count: usize,
    pub related_limit: usize,
    pub excerpt_length: usize,
    /// strftime pattern used for the display date of new posts
    pub date_format: String,
    pub pagination_policy: PaginationPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub tick_rate_ms: u64,
    pub colors: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "BizBlog".to_string(),
            page_size: 5,
            popular_count: 3,
            related_limit: 3,
            excerpt_length: 100,
            date_format: "%b %-d, %Y".to_string(),
            pagination_policy: PaginationPolicy::Preserve,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            colors: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the query engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("blog.page_size", self.blog.page_size),
            ("blog.popular_count", self.blog.popular_count),
            ("blog.related_limit", self.blog.related_limit),
            ("blog.excerpt_length", self.blog.excerpt_length),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(invalid(field, "must be at least 1").into());
            }
        }

        if self.blog.date_format.trim().is_empty()
            || StrftimeItems::new(&self.blog.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(invalid("blog.date_format", "not a valid strftime pattern").into());
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms", "must be at least 1").into());
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("BIZBLOG_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("bizblog").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("bizblog"))
}
