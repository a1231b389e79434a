use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

use crate::error::UrlError;

/// Everything outside the RFC 3986 unreserved set gets escaped.
const DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Which escaping convention to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Percent-encoding of a URI data string (space → `%20`).
    #[default]
    Path,
    /// WHATWG `application/x-www-form-urlencoded` (space → `+`).
    ///
    /// Only ASCII alphanumerics and `*-._` are left as-is, so `!`, `(`, `)`
    /// and `~` are percent-encoded. This is stricter than .NET's
    /// `WebUtility.UrlEncode`, which keeps `!()`; decoding accepts both.
    Query,
}

impl Mode {
    pub fn from_query_flag(query: bool) -> Self {
        if query {
            Mode::Query
        } else {
            Mode::Path
        }
    }
}

pub fn encode(input: &str, mode: Mode) -> String {
    match mode {
        Mode::Path => utf8_percent_encode(input, DATA).to_string(),
        Mode::Query => form_urlencoded::byte_serialize(input.as_bytes()).collect(),
    }
}

/// Malformed escapes such as `%zz` are passed through unchanged; only bytes
/// that do not form valid UTF-8 after decoding are an error.
pub fn decode(input: &str, mode: Mode) -> Result<String, UrlError> {
    let plus_as_space;
    let source = match mode {
        Mode::Path => input,
        Mode::Query => {
            plus_as_space = input.replace('+', " ");
            &plus_as_space
        }
    };
    percent_decode_str(source)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| UrlError::Decode(e.to_string()))
}

pub fn encode_twice(input: &str, mode: Mode) -> String {
    encode(&encode(input, mode), mode)
}

pub fn decode_twice(input: &str, mode: Mode) -> Result<String, UrlError> {
    decode(&decode(input, mode)?, mode)
}
