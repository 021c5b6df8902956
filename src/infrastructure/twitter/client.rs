//! Signed REST client for the login flow and the connections endpoint.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use tracing::{debug, instrument};

use crate::domain::errors::{ApiResult, TwitterApiError};
use crate::domain::models::config::TwitterConfig;
use crate::domain::models::{
    AuthorizeVariant, ConnectionPage, Credentials, Cursor, RequestToken, Session,
};
use crate::domain::ports::ConnectionPageSource;
use crate::infrastructure::logging::SecretScrubber;
use crate::infrastructure::oauth::{percent_encode, OAuthSigner, Parameters};
use crate::services::ConnectionCollector;

use super::classify::{classify_response, BodyFormat};
use super::types::{AccessTokenResponse, FriendsListResponse, RequestTokenResponse};

const DEFAULT_OAUTH_BASE_URL: &str = "https://api.twitter.com/oauth";
const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/1.1";
const DEFAULT_AUTHORIZE_BASE_URL: &str = "https://twitter.com/oauth";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_PAGE_SIZE: u32 = 200;
const DEFAULT_MAX_PAGES: u32 = 50;

/// Everything a [`TwitterClient`] needs at construction.
#[derive(Debug, Clone)]
pub struct TwitterClientConfig {
    pub credentials: Credentials,
    /// Request-token and access-token endpoints live under this URL
    pub oauth_base_url: String,
    /// Versioned REST base, e.g. `https://api.twitter.com/1.1`
    pub api_base_url: String,
    /// User-facing authorize pages
    pub authorize_base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
    pub max_pages: u32,
}

impl TwitterClientConfig {
    /// Config pointing at the production endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            oauth_base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            authorize_base_url: DEFAULT_AUTHORIZE_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl From<&TwitterConfig> for TwitterClientConfig {
    fn from(config: &TwitterConfig) -> Self {
        Self {
            credentials: Credentials::new(
                config.consumer_key.clone(),
                config.consumer_secret.clone(),
                config.callback_url.clone(),
            ),
            oauth_base_url: config.oauth_base_url.clone(),
            api_base_url: config.api_base_url.clone(),
            authorize_base_url: config.authorize_base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            page_size: config.page_size,
            max_pages: config.max_pages,
        }
    }
}

/// OAuth 1.0a client.
///
/// Holds only the application credentials. Per-user state (tokens, cursors,
/// accumulated connections) is passed in by the caller, so one instance can
/// serve any number of concurrent flows.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    signer: OAuthSigner,
    callback_url: String,
    oauth_base_url: String,
    api_base_url: String,
    authorize_base_url: String,
    page_size: u32,
    max_pages: u32,
}

impl TwitterClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns [`TwitterApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: TwitterClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("deskscout/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let Credentials {
            consumer_key,
            consumer_secret,
            callback_url,
        } = config.credentials;

        Ok(Self {
            http,
            signer: OAuthSigner::new(consumer_key, consumer_secret),
            callback_url,
            oauth_base_url: config.oauth_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            authorize_base_url: config.authorize_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            max_pages: config.max_pages,
        })
    }

    /// Configured page size for connection traversal.
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Start the login flow by obtaining a temporary request token.
    #[instrument(skip(self))]
    pub async fn get_request_token(&self) -> ApiResult<RequestToken> {
        let url = format!("{}/request_token", self.oauth_base_url);
        let mut extra = Parameters::new();
        extra.insert("oauth_callback".to_string(), self.callback_url.clone());

        let body = self
            .send_signed(Method::POST, &url, &extra, None, "", BodyFormat::Form)
            .await?;
        let token = RequestTokenResponse::parse(&body)?.into_request_token()?;
        debug!("obtained request token");
        Ok(token)
    }

    /// URL the end user must visit to approve the application.
    ///
    /// No I/O. [`AuthorizeVariant::Authenticate`] skips the approval screen
    /// for users who already granted access.
    pub fn authorize_url(&self, token: &RequestToken, variant: AuthorizeVariant) -> String {
        format!(
            "{}/{}?oauth_token={}",
            self.authorize_base_url,
            variant.path(),
            percent_encode(&token.oauth_token)
        )
    }

    /// Exchange the request token and the verifier from the callback for a session.
    #[instrument(skip(self, oauth_token, oauth_verifier))]
    pub async fn get_access_token(
        &self,
        oauth_token: &str,
        oauth_verifier: &str,
    ) -> ApiResult<Session> {
        if oauth_token.is_empty() {
            return Err(TwitterApiError::Protocol(
                "oauth_token must not be empty".to_string(),
            ));
        }
        if oauth_verifier.is_empty() {
            return Err(TwitterApiError::Protocol(
                "oauth_verifier must not be empty".to_string(),
            ));
        }

        let url = format!("{}/access_token", self.oauth_base_url);
        let mut extra = Parameters::new();
        extra.insert("oauth_verifier".to_string(), oauth_verifier.to_string());
        extra.insert("oauth_token".to_string(), oauth_token.to_string());

        let body = self
            .send_signed(
                Method::POST,
                &url,
                &extra,
                Some(oauth_token),
                "",
                BodyFormat::Form,
            )
            .await?;
        let session = AccessTokenResponse::parse(&body)?.into_session()?;
        debug!(screen_name = %session.screen_name, "login completed");
        Ok(session)
    }

    /// Fetch one page of the accounts the session user follows.
    #[instrument(skip(self, session, cursor), fields(cursor = %cursor))]
    pub async fn list_connections_page(
        &self,
        session: &Session,
        cursor: &Cursor,
        page_size: u32,
    ) -> ApiResult<ConnectionPage> {
        let url = format!("{}/friends/list.json", self.api_base_url);
        let mut extra = Parameters::new();
        extra.insert("cursor".to_string(), cursor.as_str().to_string());
        extra.insert("count".to_string(), page_size.to_string());
        extra.insert("skip_status".to_string(), "true".to_string());
        extra.insert("include_user_entities".to_string(), "false".to_string());
        if !session.user_id.is_empty() {
            extra.insert("user_id".to_string(), session.user_id.clone());
        }

        let body = self
            .send_signed(
                Method::GET,
                &url,
                &extra,
                Some(&session.oauth_token),
                &session.oauth_token_secret,
                BodyFormat::Json,
            )
            .await?;
        let response: FriendsListResponse = serde_json::from_str(&body)?;
        Ok(response.into())
    }

    /// Walk every page from the first cursor to the end cursor.
    ///
    /// Fails as a whole if any page fails; nothing partial is returned.
    pub async fn list_all_connections(
        &self,
        session: &Session,
        page_size: u32,
    ) -> ApiResult<BTreeMap<String, String>> {
        ConnectionCollector::new(self.max_pages)
            .collect(self, session, page_size)
            .await
    }

    async fn send_signed(
        &self,
        method: Method,
        url: &str,
        extra: &Parameters,
        token: Option<&str>,
        token_secret: &str,
        format: BodyFormat,
    ) -> ApiResult<String> {
        let signed = self
            .signer
            .sign_request(method.as_str(), url, extra, token, token_secret);

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, &signed.authorization);
        let query = signed.query_pairs();
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            status,
            body = %SecretScrubber::shared().scrub_message(&body),
            "received response"
        );

        classify_response(status, &body, format)?;
        Ok(body)
    }
}

#[async_trait]
impl ConnectionPageSource for TwitterClient {
    async fn list_connections_page(
        &self,
        session: &Session,
        cursor: &Cursor,
        page_size: u32,
    ) -> ApiResult<ConnectionPage> {
        Self::list_connections_page(self, session, cursor, page_size).await
    }
}
