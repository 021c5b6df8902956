//! Response classification shared by every signed call.

use crate::domain::errors::{ApiResult, TwitterApiError};

use super::types::ErrorEnvelope;

/// Body the provider serves instead of an error envelope while a feature is
/// throttled or under maintenance.
pub const MAINTENANCE_SENTINEL: &str = "現在この機能は一時的にご利用いただけません";

/// User-facing message attached to every rate-limit condition.
pub const RATE_LIMIT_MESSAGE: &str =
    "API access limit reached. Wait 15 minutes and try again";

/// Provider error codes with dedicated handling.
pub mod codes {
    pub const PAGE_DOES_NOT_EXIST: i64 = 34;
    pub const RATE_LIMIT_EXCEEDED: i64 = 88;
    pub const INVALID_OR_EXPIRED_TOKEN: i64 = 89;
}

/// What a successful body is expected to look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// `application/x-www-form-urlencoded` (token endpoints)
    Form,
    /// `application/json` (REST endpoints)
    Json,
}

/// Decide whether a response is a success.
///
/// Checks run in order: maintenance sentinel, JSON error envelope, HTTP
/// status, then (for JSON endpoints) that the body parses at all. The body
/// itself is left to the caller to deserialize.
pub fn classify_response(status: u16, body: &str, format: BodyFormat) -> ApiResult<()> {
    if body.trim() == MAINTENANCE_SENTINEL {
        return Err(TwitterApiError::RateLimited {
            message: RATE_LIMIT_MESSAGE.to_string(),
        });
    }

    if let Some(entry) = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.errors.into_iter().next())
    {
        return Err(match entry.code {
            codes::RATE_LIMIT_EXCEEDED => TwitterApiError::RateLimited {
                message: RATE_LIMIT_MESSAGE.to_string(),
            },
            codes::INVALID_OR_EXPIRED_TOKEN => TwitterApiError::AuthExpired {
                code: entry.code,
                message: entry.message,
            },
            _ => TwitterApiError::Api {
                status: Some(status),
                code: Some(entry.code),
                message: entry.message,
            },
        });
    }

    if status == 429 {
        return Err(TwitterApiError::RateLimited {
            message: RATE_LIMIT_MESSAGE.to_string(),
        });
    }

    if !(200..300).contains(&status) {
        return Err(TwitterApiError::Api {
            status: Some(status),
            code: None,
            message: body.trim().to_string(),
        });
    }

    if format == BodyFormat::Json {
        serde_json::from_str::<serde_json::Value>(body)?;
    }

    Ok(())
}
