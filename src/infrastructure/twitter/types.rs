//! Wire types for the token endpoints and the connections endpoint.

use serde::Deserialize;

use crate::domain::errors::{ApiResult, TwitterApiError};
use crate::domain::models::{Connection, ConnectionPage, Cursor, RequestToken, Session};

/// Form body of the request-token endpoint.
#[derive(Debug, Deserialize)]
pub struct RequestTokenResponse {
    pub oauth_token: Option<String>,
    pub oauth_callback_confirmed: Option<String>,
}

impl RequestTokenResponse {
    pub fn parse(body: &str) -> ApiResult<Self> {
        Ok(serde_urlencoded::from_str(body)?)
    }

    pub fn into_request_token(self) -> ApiResult<RequestToken> {
        Ok(RequestToken {
            oauth_token: required(self.oauth_token, "oauth_token")?,
        })
    }
}

/// Form body of the access-token endpoint.
#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    pub oauth_token: Option<String>,
    pub oauth_token_secret: Option<String>,
    pub user_id: Option<String>,
    pub screen_name: Option<String>,
}

impl AccessTokenResponse {
    pub fn parse(body: &str) -> ApiResult<Self> {
        Ok(serde_urlencoded::from_str(body)?)
    }

    pub fn into_session(self) -> ApiResult<Session> {
        Ok(Session {
            oauth_token: required(self.oauth_token, "oauth_token")?,
            oauth_token_secret: required(self.oauth_token_secret, "oauth_token_secret")?,
            user_id: required(self.user_id, "user_id")?,
            screen_name: required(self.screen_name, "screen_name")?,
        })
    }
}

fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TwitterApiError::Protocol(format!("response is missing `{field}`")))
}

/// One followed account as returned by `friends/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub screen_name: String,
    pub name: String,
}

/// JSON body of `friends/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct FriendsListResponse {
    pub users: Vec<UserRecord>,
    pub next_cursor_str: String,
}

impl From<FriendsListResponse> for ConnectionPage {
    fn from(response: FriendsListResponse) -> Self {
        Self {
            records: response
                .users
                .into_iter()
                .map(|user| Connection {
                    screen_name: user.screen_name,
                    display_name: user.name,
                })
                .collect(),
            next_cursor: Cursor::new(response.next_cursor_str),
        }
    }
}

/// `{"errors":[{"code":88,"message":"Rate limit exceeded"}]}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEntry {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
