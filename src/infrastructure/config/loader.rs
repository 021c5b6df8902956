use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;
use url::Url;

use crate::domain::models::config::Config;

/// Largest page the connections endpoint will return
pub const MAX_PAGE_SIZE: u32 = 200;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid page_size: {0}. Must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidPageSize(u32),

    #[error("Invalid max_pages: {0}. Must be at least 1")]
    InvalidMaxPages(u32),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Convention name cannot be empty")]
    EmptyConventionName,

    #[error("At least one hall must be configured")]
    EmptyHallList,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Missing {0}. Set it in .deskscout/config.yaml or DESKSCOUT_TWITTER__{env}", env = .0.to_uppercase())]
    MissingCredential(&'static str),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .deskscout/config.yaml (project config)
    /// 3. .deskscout/local.yaml (local overrides, optional)
    /// 4. Environment variables (DESKSCOUT_* prefix, `__` separates nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".deskscout/config.yaml"))
            .merge(Yaml::file(".deskscout/local.yaml"))
            .merge(Env::prefixed("DESKSCOUT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("DESKSCOUT_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// Credentials are not required here; commands that sign requests call
    /// [`ConfigLoader::require_credentials`].
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let twitter = &config.twitter;

        if twitter.page_size == 0 || twitter.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(twitter.page_size));
        }

        if twitter.max_pages == 0 {
            return Err(ConfigError::InvalidMaxPages(twitter.max_pages));
        }

        if twitter.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(twitter.timeout_secs));
        }

        for (field, value) in [
            ("oauth_base_url", &twitter.oauth_base_url),
            ("api_base_url", &twitter.api_base_url),
            ("authorize_base_url", &twitter.authorize_base_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        if config.convention.name.trim().is_empty() {
            return Err(ConfigError::EmptyConventionName);
        }

        if config.convention.halls.is_empty() {
            return Err(ConfigError::EmptyHallList);
        }

        if config.convention.halls.iter().any(|hall| hall.chars().count() != 1) {
            return Err(ConfigError::ValidationFailed(
                "each hall must be a single character".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }

    /// Ensure the application credentials needed for signing are present
    pub fn require_credentials(config: &Config) -> Result<(), ConfigError> {
        let twitter = &config.twitter;
        if twitter.consumer_key.is_empty() {
            return Err(ConfigError::MissingCredential("consumer_key"));
        }
        if twitter.consumer_secret.is_empty() {
            return Err(ConfigError::MissingCredential("consumer_secret"));
        }
        if twitter.callback_url.is_empty() {
            return Err(ConfigError::MissingCredential("callback_url"));
        }
        Ok(())
    }
}
