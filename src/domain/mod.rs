//! Domain layer for Deskscout
//!
//! This module contains the values, errors and ports shared by the signed
//! client, the paginator and the desk matcher.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ApiResult, TwitterApiError};
