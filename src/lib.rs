//! Deskscout - find followed accounts with a convention desk
//!
//! Deskscout signs OAuth 1.0a requests against the Twitter REST API, walks
//! the cursor-paginated list of accounts a user follows, and picks out the
//! display names that encode a desk slot (day, hall, block, desk).
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Values, errors and port traits
//! - **Service Layer** (`services`): Pagination and desk matching
//! - **Infrastructure Layer** (`infrastructure`): Signing, HTTP, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use deskscout::domain::models::{AuthorizeVariant, Credentials};
//! use deskscout::infrastructure::twitter::{TwitterClient, TwitterClientConfig};
//!
//! # async fn example() -> deskscout::domain::ApiResult<()> {
//! let client = TwitterClient::new(TwitterClientConfig::new(Credentials::new(
//!     "consumer-key",
//!     "consumer-secret",
//!     "https://example.com/callback",
//! )))?;
//! let token = client.get_request_token().await?;
//! println!("{}", client.authorize_url(&token, AuthorizeVariant::Authenticate));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AuthorizeVariant, Config, Connection, ConnectionPage, Credentials, Cursor, DeskSlot,
    RequestToken, Session,
};
pub use domain::ports::ConnectionPageSource;
pub use domain::{ApiResult, TwitterApiError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::oauth::{OAuthSigner, SignedRequest};
pub use infrastructure::twitter::{TwitterClient, TwitterClientConfig};
pub use services::{ConnectionCollector, DeskMatcher};
