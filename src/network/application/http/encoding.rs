//! Percent-encoding for query strings and form bodies, and the matching decoder.
//!
//! Bytes outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) become `%XX` with
//! uppercase hex digits. Text is encoded as UTF-8 first, so a non-ASCII
//! character turns into several escapes.

use alloc::string::String;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Key/value pairs in the order they should be encoded.
pub type Params<'a> = &'a [(&'a str, &'a str)];

/// Everything except the unreserved set.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// [`FORM_SET`] with `/` left literal, for query values.
pub const QUERY_SET: &AsciiSet = &FORM_SET.remove(b'/');

/// Builds `?k1=v1&k2=v2` from `params`.
///
/// Values are percent-encoded with `/` kept literal; keys are copied
/// verbatim. No trailing `&` is produced, and an empty list yields an empty
/// string rather than a lone `?`.
pub fn encode_query(params: Params<'_>) -> String {
    let mut query = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        query.push(if i == 0 { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.extend(utf8_percent_encode(value, QUERY_SET));
    }
    query
}

/// Builds an `application/x-www-form-urlencoded` body from `params`.
///
/// Keys and values are both encoded with [`FORM_SET`]. Spaces become `%20`
/// rather than `+`, so [`percent_decode`] restores the original text.
pub fn encode_form(params: Params<'_>) -> String {
    let mut body = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            body.push('&');
        }
        body.extend(utf8_percent_encode(key, FORM_SET));
        body.push('=');
        body.extend(utf8_percent_encode(value, FORM_SET));
    }
    body
}

/// Replaces every `%XX` escape with the byte it names.
///
/// Escapes that are truncated or not hex are copied through unchanged, and `+`
/// is left alone. Decoded bytes that do not form valid UTF-8 are replaced with
/// U+FFFD.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
