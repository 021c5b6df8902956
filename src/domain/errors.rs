//! Errors surfaced by the signed API client.

use thiserror::Error;

/// Everything a signed call or a paginated fetch can fail with.
///
/// The client never retries internally; each variant carries enough
/// structure for the caller to decide whether to wait, re-login or give up.
#[derive(Debug, Error)]
pub enum TwitterApiError {
    /// Network, DNS, TLS or timeout failure before a response body was read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was malformed or lacked a required field.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The provider returned a structured error.
    #[error("API error{}: {message}", format_code(.status, .code))]
    Api {
        status: Option<u16>,
        code: Option<i64>,
        message: String,
    },

    /// The provider is throttling or in maintenance mode.
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// The session token is no longer valid; the login flow must restart.
    #[error("Authentication expired (code {code}): {message}")]
    AuthExpired { code: i64, message: String },

    /// Pagination did not reach the end cursor within the page budget.
    #[error("Pagination exceeded the limit of {max_pages} pages")]
    PaginationLimitExceeded { max_pages: u32 },
}

fn format_code(status: &Option<u16>, code: &Option<i64>) -> String {
    match (*status, *code) {
        (Some(status), Some(code)) => format!(" (HTTP {status}, code {code})"),
        (Some(status), None) => format!(" (HTTP {status})"),
        (None, Some(code)) => format!(" (code {code})"),
        (None, None) => String::new(),
    }
}

impl TwitterApiError {
    /// Returns true if the caller should wait before trying again.
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns true if the session must be discarded and the login flow restarted.
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired { .. })
    }

    /// Stable snake-case name of the error kind, used in JSON output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport_error",
            Self::Protocol(_) => "protocol_error",
            Self::Api { .. } => "api_error",
            Self::RateLimited { .. } => "rate_limited",
            Self::AuthExpired { .. } => "auth_expired",
            Self::PaginationLimitExceeded { .. } => "pagination_limit_exceeded",
        }
    }
}

impl From<serde_json::Error> for TwitterApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(format!("invalid JSON body: {err}"))
    }
}

impl From<serde_urlencoded::de::Error> for TwitterApiError {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        Self::Protocol(format!("invalid form-encoded body: {err}"))
    }
}

pub type ApiResult<T> = Result<T, TwitterApiError>;
