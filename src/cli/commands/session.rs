//! Implementation of the `deskscout session` command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{create_spinner, output, CommandOutput, ProgressBarExt};
use crate::domain::models::Config;

use super::build_client;

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Request token printed by `deskscout login`
    #[arg(long)]
    pub oauth_token: String,

    /// Verifier passed to the callback URL after approval
    #[arg(long)]
    pub oauth_verifier: String,
}

#[derive(Debug, serde::Serialize)]
pub struct SessionOutput {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub user_id: String,
    pub screen_name: String,
}

impl CommandOutput for SessionOutput {
    fn to_human(&self) -> String {
        [
            format!("Logged in as @{} (id {})", self.screen_name, self.user_id),
            String::new(),
            "Export these to run `deskscout desks`:".to_string(),
            format!("  export DESKSCOUT_OAUTH_TOKEN={}", self.oauth_token),
            format!("  export DESKSCOUT_OAUTH_TOKEN_SECRET={}", self.oauth_token_secret),
            format!("  export DESKSCOUT_USER_ID={}", self.user_id),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: SessionArgs, config: &Config, json_mode: bool) -> Result<()> {
    let client = build_client(config)?;

    let spinner = create_spinner("Exchanging verifier...", !json_mode);
    let session = match client
        .get_access_token(&args.oauth_token, &args.oauth_verifier)
        .await
    {
        Ok(session) => {
            spinner.finish_success("Access token obtained");
            session
        }
        Err(err) => {
            spinner.finish_error("Access token exchange failed");
            return Err(err.into());
        }
    };

    let result = SessionOutput {
        oauth_token: session.oauth_token,
        oauth_token_secret: session.oauth_token_secret,
        user_id: session.user_id,
        screen_name: session.screen_name,
    };
    output(&result, json_mode);
    Ok(())
}
