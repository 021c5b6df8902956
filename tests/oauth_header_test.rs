//! The rendered `Authorization` header must carry every signed protocol
//! parameter, and the signature must verify against the canonical base string.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::percent_decode_str;
use sha1::Sha1;

use deskscout::infrastructure::oauth::{
    merge_parameters, parameter_string, signature_base_string, OAuthSigner, Parameters,
};

/// Parse `OAuth k="v", k2="v2"` back into decoded pairs.
fn parse_header(header: &str) -> BTreeMap<String, String> {
    let body = header.strip_prefix("OAuth ").expect("header starts with OAuth");
    body.split(", ")
        .map(|pair| {
            let (key, value) = pair.split_once('=').expect("pair has =");
            let value = value.trim_matches('"');
            (
                percent_decode_str(key).decode_utf8().unwrap().into_owned(),
                percent_decode_str(value).decode_utf8().unwrap().into_owned(),
            )
        })
        .collect()
}

fn params(pairs: &[(&str, &str)]) -> Parameters {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_header_round_trip_recovers_signed_parameters() {
    let signer = OAuthSigner::new("CK", "CS");
    let extra = params(&[
        ("oauth_verifier", "v e r!*()'"),
        ("oauth_token", "tok/+="),
        ("cursor", "-1"),
    ]);
    let request = signer.sign_request("POST", "https://api.example.com/oauth/access_token", &extra, Some("tok/+="), "");

    let parsed = parse_header(&request.authorization);
    for (key, value) in request.parameters.iter().filter(|(k, _)| k.starts_with("oauth_")) {
        assert_eq!(parsed.get(key), Some(value), "header lost {key}");
    }
    assert!(parsed.contains_key("oauth_signature"));
    assert!(!parsed.contains_key("cursor"), "call parameters travel in the query");
    assert_eq!(request.query_pairs(), vec![("cursor", "-1")]);
}

#[test]
fn test_signature_verifies_against_base_string() {
    let signer = OAuthSigner::new("consumer key", "consumer&secret");
    let base = signer.base_parameters_at(Some("token"), "fixednonce", 1_700_000_000);
    let extra = params(&[("count", "200"), ("cursor", "-1"), ("skip_status", "true")]);
    let request = signer.sign_with_base(
        "GET",
        "https://api.example.com/1.1/friends/list.json",
        base.clone(),
        &extra,
        "token secret",
    );

    let base_string = signature_base_string(
        "GET",
        "https://api.example.com/1.1/friends/list.json",
        &parameter_string(&merge_parameters(&base, &extra)),
    );
    let mut mac = Hmac::<Sha1>::new_from_slice(b"consumer%26secret&token%20secret").unwrap();
    mac.update(base_string.as_bytes());
    let expected = BASE64.encode(mac.finalize().into_bytes());

    assert_eq!(request.signature(), Some(expected.as_str()));
    assert_eq!(parse_header(&request.authorization)["oauth_signature"], expected);
}

#[test]
fn test_fresh_nonce_per_request() {
    let signer = OAuthSigner::new("CK", "CS");
    let first = signer.sign_request("GET", "https://api.example.com/x", &Parameters::new(), None, "");
    let second = signer.sign_request("GET", "https://api.example.com/x", &Parameters::new(), None, "");

    assert_ne!(
        first.parameters["oauth_nonce"],
        second.parameters["oauth_nonce"]
    );
    assert_ne!(first.signature(), second.signature());
}
