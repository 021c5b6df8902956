//! Command-line interface
//!
//! Parses arguments with clap, dispatches to [`commands`] and renders
//! results through [`output`].

pub mod commands;
pub mod output;
pub mod types;

use std::path::Path;

use anyhow::Result;

use crate::domain::errors::TwitterApiError;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use types::{Cli, Commands};

/// Load configuration from `path`, or from `.deskscout/` plus the environment.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Login(args) => commands::login::execute(args, config, cli.json).await,
        Commands::Session(args) => commands::session::execute(args, config, cli.json).await,
        Commands::Desks(args) => commands::desks::execute(args, config, cli.json).await,
        Commands::Config => commands::config::execute(config, cli.json),
    }
}

/// Stable error kind and an optional hint for the user.
fn describe(err: &anyhow::Error) -> (&'static str, Option<&'static str>) {
    match err.downcast_ref::<TwitterApiError>() {
        Some(api) if api.is_auth_expired() => (
            api.kind(),
            Some("Run `deskscout login` again to obtain a new session."),
        ),
        Some(api) => (api.kind(), None),
        None => ("error", None),
    }
}

/// Print the error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let (kind, hint) = describe(&err);

    if json_mode {
        let body = serde_json::json!({
            "error": kind,
            "message": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
        if let Some(hint) = hint {
            eprintln!("{hint}");
        }
    }

    std::process::exit(1)
}
