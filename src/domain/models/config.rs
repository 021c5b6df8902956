use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Deskscout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Provider credentials and endpoints
    #[serde(default)]
    pub twitter: TwitterConfig,

    /// Convention whose desk slots are looked for
    #[serde(default)]
    pub convention: ConventionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Provider configuration: app credentials, endpoints and paging limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TwitterConfig {
    /// Application consumer key
    #[serde(default)]
    pub consumer_key: String,

    /// Application consumer secret
    #[serde(default)]
    pub consumer_secret: String,

    /// Where the provider redirects the user after approval
    #[serde(default)]
    pub callback_url: String,

    /// Base URL of the request-token / access-token endpoints
    #[serde(default = "default_oauth_base_url")]
    pub oauth_base_url: String,

    /// Versioned base URL of the REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the user-facing authorize pages
    #[serde(default = "default_authorize_base_url")]
    pub authorize_base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connections requested per page (provider maximum is 200)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound on pages fetched in one traversal
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_oauth_base_url() -> String {
    "https://api.twitter.com/oauth".to_string()
}

fn default_api_base_url() -> String {
    "https://api.twitter.com/1.1".to_string()
}

fn default_authorize_base_url() -> String {
    "https://twitter.com/oauth".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    200
}

const fn default_max_pages() -> u32 {
    50
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            callback_url: String::new(),
            oauth_base_url: default_oauth_base_url(),
            api_base_url: default_api_base_url(),
            authorize_base_url: default_authorize_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

/// Convention configuration
///
/// The convention name and hall order change every event, so neither is
/// compiled into the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConventionConfig {
    /// Event name as it appears in display names, e.g. "C99"
    #[serde(default = "default_convention_name")]
    pub name: String,

    /// Hall names in sort order
    #[serde(default = "default_halls")]
    pub halls: Vec<String>,
}

fn default_convention_name() -> String {
    "C99".to_string()
}

fn default_halls() -> Vec<String> {
    vec!["東".to_string(), "西".to_string(), "南".to_string()]
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self {
            name: default_convention_name(),
            halls: default_halls(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
