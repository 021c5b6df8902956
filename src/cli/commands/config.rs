//! Implementation of the `deskscout config` command.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, serde::Serialize)]
pub struct ConfigOutput {
    #[serde(flatten)]
    pub config: Config,
}

impl ConfigOutput {
    /// Copy of `config` that is safe to print
    pub fn redacted(config: &Config) -> Self {
        let mut config = config.clone();
        if !config.twitter.consumer_secret.is_empty() {
            config.twitter.consumer_secret = REDACTED.to_string();
        }
        Self { config }
    }
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(&ConfigOutput::redacted(config), json_mode);
    Ok(())
}
