//! Twitter REST API client
//!
//! Signed calls for the three-legged login flow and cursor-paginated
//! retrieval of followed accounts.

pub mod classify;
pub mod client;
pub mod types;

pub use classify::{classify_response, BodyFormat, MAINTENANCE_SENTINEL, RATE_LIMIT_MESSAGE};
pub use client::{TwitterClient, TwitterClientConfig};
pub use types::{ErrorEnvelope, FriendsListResponse, UserRecord};
