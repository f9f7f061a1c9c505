//! Request assembly: request line, header block and optional form body.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use base64ct::{Base64, Encoding};
use heapless::Vec as BoundedVec;

use super::encoding::{Params, encode_form, encode_query};
use super::url::{Endpoint, ParsedUrl, host_header};
use crate::network::error::Error;

/// Upper bound on the number of headers a request can carry.
pub const MAX_HEADERS: usize = 8;
const MAX_HEADER_NAME_LEN: usize = 64;

/// Content type announced for form bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request methods the client can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`, parameters travel in the query string.
    Get,
    /// `POST`, parameters travel in a form-encoded body.
    Post,
}

impl Method {
    /// The method token as written on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Maps a method name to a [`Method`].
    ///
    /// Only the exact token `POST` selects [`Method::Post`]; every other
    /// name, including lowercase `post`, falls back to [`Method::Get`].
    pub fn from_name(name: &str) -> Self {
        if name == "POST" { Method::Post } else { Method::Get }
    }
}

/// A single request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name.
    pub name: heapless::String<MAX_HEADER_NAME_LEN>,
    /// Header value.
    pub value: String,
}

/// Everything needed to put one request on the wire.
///
/// Headers are written in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Path plus query, exactly as it appears on the request line.
    pub target: String,
    /// Header block.
    pub headers: BoundedVec<Header, MAX_HEADERS>,
    /// Body bytes sent after the blank line.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            headers: BoundedVec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn header(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        let header = Header {
            name: heapless::String::try_from(name).map_err(|_| Error::ProtocolError)?,
            value: value.into(),
        };
        self.headers.push(header).map_err(|_| Error::ProtocolError)
    }

    /// Builds a `GET` request.
    ///
    /// When `query` is given its encoded form is appended to the target,
    /// joined to any query the URL already carries.
    pub fn get(
        url: &ParsedUrl,
        endpoint: &Endpoint<'_>,
        query: Option<Params<'_>>,
        user_agent: &str,
    ) -> Result<Self, Error> {
        let mut target = url.request_target();
        if let Some(params) = query {
            let encoded = encode_query(params);
            match (url.query.is_some(), encoded.strip_prefix('?')) {
                (true, Some(pairs)) => {
                    target.push('&');
                    target.push_str(pairs);
                }
                _ => target.push_str(&encoded),
            }
        }
        Self::with_standard_headers(Method::Get, target, url, endpoint, user_agent)
    }

    /// Builds a `POST` request.
    ///
    /// With a form the body is its encoding and `Content-Type` plus
    /// `Content-Length` are set; without one the request announces
    /// `Content-Length: 0` and carries no body.
    pub fn post(
        url: &ParsedUrl,
        endpoint: &Endpoint<'_>,
        form: Option<Params<'_>>,
        user_agent: &str,
    ) -> Result<Self, Error> {
        let mut request =
            Self::with_standard_headers(Method::Post, url.request_target(), url, endpoint, user_agent)?;
        match form {
            Some(params) => {
                let body = encode_form(params).into_bytes();
                request.header("Content-Type", FORM_CONTENT_TYPE)?;
                request.header("Content-Length", body.len().to_string())?;
                request.body = Some(body);
            }
            None => request.header("Content-Length", "0")?,
        }
        Ok(request)
    }

    fn with_standard_headers(
        method: Method,
        target: String,
        url: &ParsedUrl,
        endpoint: &Endpoint<'_>,
        user_agent: &str,
    ) -> Result<Self, Error> {
        let mut request = Self::new(method, target);
        request.header("Host", host_header(endpoint))?;
        request.header("User-Agent", user_agent)?;
        request.header("Connection", "close")?;
        request.header("Accept", "*/*")?;
        if let Some((user, password)) = url.credentials() {
            let mut pair = String::with_capacity(user.len() + password.len() + 1);
            pair.push_str(user);
            pair.push(':');
            pair.push_str(password);
            let mut value = String::from("Basic ");
            value.push_str(&Base64::encode_string(pair.as_bytes()));
            request.header("Authorization", value)?;
        }
        Ok(request)
    }

    /// The request line without its CRLF, e.g. `GET / HTTP/1.1`.
    pub fn request_line(&self) -> String {
        let mut line = String::with_capacity(self.target.len() + 16);
        line.push_str(self.method.as_str());
        line.push(' ');
        line.push_str(&self.target);
        line.push_str(" HTTP/1.1");
        line
    }

    /// Serializes the request into the bytes sent on the connection.
    pub fn to_bytes(&self) -> Vec<u8> {
        let body_len = self.body.as_ref().map_or(0, Vec::len);
        let mut buf = Vec::with_capacity(256 + body_len);

        buf.extend_from_slice(self.request_line().as_bytes());
        buf.extend_from_slice(b"\r\n");
        for header in &self.headers {
            buf.extend_from_slice(header.name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(header.value.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(b"\r\n");
        if let Some(body) = &self.body {
            buf.extend_from_slice(body);
        }
        buf
    }
}
