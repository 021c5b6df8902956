//! OAuth 1.0a HMAC-SHA1 request signing.
//!
//! Everything here is pure except [`generate_nonce`] and
//! [`OAuthSigner::base_parameters`], which read the RNG and the clock.
//! Signing never fails: bad credentials yield a well-formed but rejected
//! signature, which the provider reports back as an authentication error.

use std::collections::BTreeMap;
use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::{distr::Alphanumeric, Rng};
use sha1::Sha1;

use super::encoding::percent_encode;

/// Parameter set keyed by raw (unencoded) name.
pub type Parameters = BTreeMap<String, String>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";
pub const SIGNATURE_PARAM: &str = "oauth_signature";

const NONCE_LENGTH: usize = 32;
const OAUTH_PARAM_PREFIX: &str = "oauth_";

type HmacSha1 = Hmac<Sha1>;

/// Generate a 32-character nonce drawn from `[A-Za-z0-9]`.
pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Merge protocol and call-specific parameters; call-specific values win on collision.
pub fn merge_parameters(base: &Parameters, extra: &Parameters) -> Parameters {
    let mut merged = base.clone();
    merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Encode every key and value, then join as `k=v` pairs sorted by encoded key.
pub fn parameter_string(params: &Parameters) -> String {
    encoded_sorted(params)
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `METHOD&encoded(url)&encoded(parameter_string)`.
pub fn signature_base_string(method: &str, url: &str, parameter_string: &str) -> String {
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(parameter_string)
    )
}

/// `encoded(consumer_secret)&encoded(token_secret)`; the token secret may be empty.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Compute the base64 HMAC-SHA1 signature for one request.
pub fn sign(
    method: &str,
    url: &str,
    base: &Parameters,
    extra: &Parameters,
    consumer_secret: &str,
    token_secret: &str,
) -> String {
    let merged = merge_parameters(base, extra);
    let base_string = signature_base_string(method, url, &parameter_string(&merged));
    let key = signing_key(consumer_secret, token_secret);

    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Render `OAuth k1="v1", k2="v2"` with keys and values encoded, sorted by encoded key.
pub fn authorization_header(params: &Parameters) -> String {
    let pairs = encoded_sorted(params)
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {pairs}")
}

fn encoded_sorted(params: &Parameters) -> BTreeMap<String, String> {
    params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect()
}

/// A request that has been signed and is ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Upper-case HTTP method
    pub method: String,
    /// URL without query string, exactly as it was signed
    pub base_url: String,
    /// Every signed parameter plus `oauth_signature`
    pub parameters: Parameters,
    /// Rendered `Authorization` header value
    pub authorization: String,
}

impl SignedRequest {
    /// Call-specific parameters that travel in the query string.
    ///
    /// Protocol (`oauth_*`) parameters are carried by the header instead.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.parameters
            .iter()
            .filter(|(k, _)| !k.starts_with(OAUTH_PARAM_PREFIX))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    pub fn signature(&self) -> Option<&str> {
        self.parameters.get(SIGNATURE_PARAM).map(String::as_str)
    }
}

/// Signs requests on behalf of one application.
#[derive(Clone)]
pub struct OAuthSigner {
    consumer_key: String,
    consumer_secret: String,
}

impl fmt::Debug for OAuthSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

impl OAuthSigner {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Protocol parameters with a fresh nonce and the current timestamp.
    pub fn base_parameters(&self, token: Option<&str>) -> Parameters {
        self.base_parameters_at(token, &generate_nonce(), Utc::now().timestamp())
    }

    /// Protocol parameters with an explicit nonce and timestamp.
    ///
    /// `oauth_token` is only present when a non-empty token is supplied.
    pub fn base_parameters_at(&self, token: Option<&str>, nonce: &str, timestamp: i64) -> Parameters {
        let mut params = Parameters::new();
        params.insert("oauth_consumer_key".to_string(), self.consumer_key.clone());
        params.insert("oauth_nonce".to_string(), nonce.to_string());
        params.insert(
            "oauth_signature_method".to_string(),
            SIGNATURE_METHOD.to_string(),
        );
        params.insert("oauth_timestamp".to_string(), timestamp.to_string());
        params.insert("oauth_version".to_string(), OAUTH_VERSION.to_string());
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            params.insert("oauth_token".to_string(), token.to_string());
        }
        params
    }

    /// Sign a request using a fresh nonce and timestamp.
    pub fn sign_request(
        &self,
        method: &str,
        url: &str,
        extra: &Parameters,
        token: Option<&str>,
        token_secret: &str,
    ) -> SignedRequest {
        let base = self.base_parameters(token);
        self.sign_with_base(method, url, base, extra, token_secret)
    }

    /// Sign a request over caller-provided protocol parameters.
    pub fn sign_with_base(
        &self,
        method: &str,
        url: &str,
        base: Parameters,
        extra: &Parameters,
        token_secret: &str,
    ) -> SignedRequest {
        let signature = sign(method, url, &base, extra, &self.consumer_secret, token_secret);

        let mut parameters = merge_parameters(&base, extra);
        parameters.insert(SIGNATURE_PARAM.to_string(), signature);

        let header_params: Parameters = parameters
            .iter()
            .filter(|(k, _)| k.starts_with(OAUTH_PARAM_PREFIX))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        SignedRequest {
            method: method.to_uppercase(),
            base_url: url.to_string(),
            parameters,
            authorization: authorization_header(&header_params),
        }
    }
}
