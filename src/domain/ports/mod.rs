//! Port trait definitions (Hexagonal Architecture)
//!
//! - ConnectionPageSource: one page of a user's connection list
//!
//! Services depend on these traits rather than on the HTTP client directly.

pub mod connection_source;

pub use connection_source::ConnectionPageSource;
