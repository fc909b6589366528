//! Encoding of stored URLs for the `Location` header.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is in a redirect target: unreserved characters, URL
/// delimiters and `%` so existing escapes survive. Everything else,
/// including spaces, control characters and non-ASCII bytes, is escaped.
const LOCATION_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'%')
    .remove(b'#')
    .remove(b'?')
    .remove(b'=')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';');

/// Percent-encodes `url` so it is always a valid, ASCII-only header value.
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION_SAFE).to_string()
}
