//! Infrastructure layer module
//!
//! This module contains the adapters that talk to the outside world:
//! - OAuth 1.0a request signing
//! - Twitter REST client
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod oauth;
pub mod twitter;
