//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::desks::DesksArgs;
use super::commands::login::LoginArgs;
use super::commands::session::SessionArgs;

#[derive(Parser, Debug)]
#[command(name = "deskscout")]
#[command(about = "Find followed accounts that have a desk at the convention", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of .deskscout/
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain a request token and print the authorize URL
    Login(LoginArgs),

    /// Exchange an approved request token for a session
    Session(SessionArgs),

    /// List followed accounts with a desk, ordered by location
    Desks(DesksArgs),

    /// Print the effective configuration with secrets redacted
    Config,
}
