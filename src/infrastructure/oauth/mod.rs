//! OAuth 1.0a request signing
//!
//! Percent-encoding, parameter normalization, signature base strings,
//! HMAC-SHA1 signatures and `Authorization` header rendering.

pub mod encoding;
pub mod signer;

pub use encoding::percent_encode;
pub use signer::{
    authorization_header, generate_nonce, merge_parameters, parameter_string, sign,
    signature_base_string, signing_key, OAuthSigner, Parameters, SignedRequest,
};
