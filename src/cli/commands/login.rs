//! Implementation of the `deskscout login` command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{create_spinner, output, CommandOutput, ProgressBarExt};
use crate::domain::models::{AuthorizeVariant, Config};

use super::build_client;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Always show the approval screen, even if the app was approved before
    #[arg(long)]
    pub always_approve: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct LoginOutput {
    pub oauth_token: String,
    pub authorize_url: String,
}

impl CommandOutput for LoginOutput {
    fn to_human(&self) -> String {
        [
            "Open this URL and approve the application:".to_string(),
            format!("  {}", self.authorize_url),
            String::new(),
            "Then run:".to_string(),
            format!(
                "  deskscout session --oauth-token {} --oauth-verifier <VERIFIER>",
                self.oauth_token
            ),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: LoginArgs, config: &Config, json_mode: bool) -> Result<()> {
    let client = build_client(config)?;
    let variant = if args.always_approve {
        AuthorizeVariant::Authorize
    } else {
        AuthorizeVariant::Authenticate
    };

    let spinner = create_spinner("Requesting token...", !json_mode);
    let token = match client.get_request_token().await {
        Ok(token) => {
            spinner.finish_success("Request token obtained");
            token
        }
        Err(err) => {
            spinner.finish_error("Request token failed");
            return Err(err.into());
        }
    };

    let result = LoginOutput {
        authorize_url: client.authorize_url(&token, variant),
        oauth_token: token.oauth_token,
    };
    output(&result, json_mode);
    Ok(())
}
