//! Implementation of the `deskscout desks` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{create_spinner, output, CommandOutput, ProgressBarExt, TableFormatter};
use crate::domain::models::{Config, DeskSlot, Session};
use crate::infrastructure::config::MAX_PAGE_SIZE;
use crate::services::DeskMatcher;

use super::build_client;

#[derive(Args, Debug)]
pub struct DesksArgs {
    /// Session token from `deskscout session`
    #[arg(long, env = "DESKSCOUT_OAUTH_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Session token secret from `deskscout session`
    #[arg(long, env = "DESKSCOUT_OAUTH_TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,

    /// Numeric id of the logged-in user
    #[arg(long, env = "DESKSCOUT_USER_ID", default_value = "")]
    pub user_id: String,

    /// Accounts per page (defaults to twitter.page_size)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub page_size: Option<u32>,
}

#[derive(Debug, serde::Serialize)]
pub struct DesksOutput {
    pub convention: String,
    pub connections: usize,
    pub desks: Vec<DeskSlot>,
}

impl CommandOutput for DesksOutput {
    fn to_human(&self) -> String {
        if self.desks.is_empty() {
            return format!(
                "None of your {} followed accounts mention {}.",
                self.connections, self.convention
            );
        }

        format!(
            "{}\n{} of {} followed accounts mention {}.",
            TableFormatter::new().format_desks(&self.desks),
            self.desks.len(),
            self.connections,
            self.convention
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: DesksArgs, config: &Config, json_mode: bool) -> Result<()> {
    let client = build_client(config)?;
    let matcher = DeskMatcher::new(&config.convention).context("Invalid hall configuration")?;
    let page_size = args.page_size.unwrap_or_else(|| client.page_size());

    let session = Session {
        oauth_token: args.token,
        oauth_token_secret: args.token_secret,
        user_id: args.user_id,
        screen_name: String::new(),
    };

    let spinner = create_spinner("Fetching followed accounts...", !json_mode);
    let connections = match client.list_all_connections(&session, page_size).await {
        Ok(connections) => {
            spinner.finish_success(format!("Fetched {} accounts", connections.len()));
            connections
        }
        Err(err) => {
            spinner.finish_error("Fetching followed accounts failed");
            return Err(err.into());
        }
    };

    let result = DesksOutput {
        convention: config.convention.name.clone(),
        connections: connections.len(),
        desks: matcher.find_desks(&connections),
    };
    output(&result, json_mode);
    Ok(())
}
