//! Command implementations
//!
//! Each command exposes clap `Args`, a serializable output type and an
//! `execute` function.

pub mod config;
pub mod desks;
pub mod login;
pub mod session;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::twitter::{TwitterClient, TwitterClientConfig};

/// Build a signed client from the effective configuration.
pub(crate) fn build_client(config: &Config) -> Result<TwitterClient> {
    ConfigLoader::require_credentials(config)?;
    TwitterClient::new(TwitterClientConfig::from(&config.twitter))
        .context("Failed to build HTTP client")
}
