//! Response parsing: status line validation and body extraction.
//!
//! The parser works on the complete response text. Headers other than the
//! status line are not interpreted, so `Content-Length` and
//! `Transfer-Encoding` have no effect: the body is everything after the first
//! blank line, which is only correct because the connection was read to EOF.

use alloc::string::String;
use core::fmt;

use serde::Serialize;

use super::encoding::percent_decode;

/// Status code used when a URL cannot be resolved.
pub const BAD_REQUEST: u16 = 400;
/// Status code used for malformed or empty responses.
pub const INTERNAL_ERROR: u16 = 500;
/// Status code used when the peer does not answer with HTTP/1.x.
pub const VERSION_NOT_SUPPORTED: u16 = 505;

/// A request that did not yield a usable status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The URL has no host, or no port could be determined for it.
    InvalidUrl,
    /// The status line has fewer than three fields, or a non-numeric code.
    MalformedStatusLine,
    /// The status line does not start with an `HTTP/1.` version token.
    UnsupportedVersion,
    /// The peer closed the connection without sending anything.
    EmptyResponse,
}

impl Failure {
    /// The status code this failure is reported as.
    pub const fn code(self) -> u16 {
        match self {
            Failure::InvalidUrl => BAD_REQUEST,
            Failure::MalformedStatusLine => INTERNAL_ERROR,
            Failure::UnsupportedVersion => VERSION_NOT_SUPPORTED,
            Failure::EmptyResponse => INTERNAL_ERROR,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::InvalidUrl => f.write_str("invalid url"),
            Failure::MalformedStatusLine => f.write_str("malformed status line"),
            Failure::UnsupportedVersion => f.write_str("unsupported http version"),
            Failure::EmptyResponse => f.write_str("empty response"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Failure {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Failure::InvalidUrl => defmt::write!(f, "InvalidUrl"),
            Failure::MalformedStatusLine => defmt::write!(f, "MalformedStatusLine"),
            Failure::UnsupportedVersion => defmt::write!(f, "UnsupportedVersion"),
            Failure::EmptyResponse => defmt::write!(f, "EmptyResponse"),
        }
    }
}

/// The result of one request: a status code and the decoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Status code from the status line, or the code of a [`Failure`].
    pub code: u16,
    /// Percent-decoded body.
    pub body: String,
}

impl Response {
    /// Creates a response.
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Parses a complete raw response.
    ///
    /// An empty input short-circuits to [`Failure::EmptyResponse`]. Otherwise
    /// the body is extracted and decoded even when the status line is
    /// rejected, and the failure's code takes the place of the status code.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Failure::EmptyResponse.into();
        }
        let code = parse_status_line(raw).unwrap_or_else(Failure::code);
        Self::new(code, percent_decode(raw_body(raw)))
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(INTERNAL_ERROR, String::new())
    }
}

impl From<Failure> for Response {
    fn from(failure: Failure) -> Self {
        Self::new(failure.code(), String::new())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.code)?;
        f.write_str(&self.body)
    }
}

/// Validates the status line and returns its status code.
///
/// The status line is everything before the first CRLF, or the whole input
/// when there is none. Fields are separated by single spaces, so the reason
/// phrase may be empty but the space before it may not be omitted.
pub fn parse_status_line(raw: &str) -> Result<u16, Failure> {
    let line = raw.split_once("\r\n").map_or(raw, |(line, _)| line);
    let mut fields = line.split(' ');
    let (Some(version), Some(code), Some(_reason)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(Failure::MalformedStatusLine);
    };

    if !version.to_ascii_uppercase().contains("HTTP/1.") {
        return Err(Failure::UnsupportedVersion);
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Failure::MalformedStatusLine);
    }
    code.parse::<u16>().map_err(|_| Failure::MalformedStatusLine)
}

/// Everything after the first blank line, undecoded. Empty when the response
/// has no header/body separator.
pub fn raw_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map_or("", |(_, body)| body)
}
