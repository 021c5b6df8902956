//! RFC 3986 percent-encoding for OAuth 1.0a.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved set: ALPHA / DIGIT / "-" / "." / "_" / "~".
///
/// Unlike a URI-component encoder this escapes `!`, `*`, `'`, `(` and `)`.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for use in a signature base string or an
/// `Authorization` header. Multi-byte characters are encoded as UTF-8 with
/// upper-case hex digits.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}
