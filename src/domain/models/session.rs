//! Values threaded through the login flow and the connection traversal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application credentials, fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub callback_url: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            callback_url: callback_url.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

/// Temporary token returned by the request-token step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
    pub oauth_token: String,
}

/// Which authorize page the user is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizeVariant {
    /// Skips the approval screen when the user already authorized the app.
    #[default]
    Authenticate,
    /// Always shows the approval screen.
    Authorize,
}

impl AuthorizeVariant {
    /// Path segment under the authorize base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Authenticate => "authenticate",
            Self::Authorize => "authorize",
        }
    }
}

/// User session produced by the access-token exchange.
///
/// Owned by the caller; the client never stores it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub user_id: String,
    pub screen_name: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("oauth_token", &self.oauth_token)
            .field("oauth_token_secret", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("screen_name", &self.screen_name)
            .finish()
    }
}

/// Opaque pagination token issued by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    const FIRST: &'static str = "-1";
    const END: &'static str = "0";

    /// Cursor requesting the first page.
    pub fn first() -> Self {
        Self(Self::FIRST.to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// True when no further pages exist.
    pub fn is_end(&self) -> bool {
        self.0 == Self::END
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A followed account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub screen_name: String,
    pub display_name: String,
}

/// One page of connections and the cursor of the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPage {
    pub records: Vec<Connection>,
    pub next_cursor: Cursor,
}
