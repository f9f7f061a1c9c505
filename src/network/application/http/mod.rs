//! HTTP/1.1 GET and POST over raw byte streams.
//!
//! No HTTP library is involved: [`request`] writes the request line and
//! header block by hand and [`response`] picks the status code and body out
//! of the bytes that come back.
//!
//! # Limitations
//!
//! - One request per connection. Every request sends `Connection: close` and
//!   the response is read until the server closes the stream, which is how
//!   the client knows the response is complete. Keep-alive is not supported.
//! - Chunked transfer-encoding is not decoded; the body is whatever follows
//!   the first blank line.
//! - `https` URLs resolve to port 443, but no TLS is spoken.
//! - No connect or read timeout is applied.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rawhttp::network::application::http::Client;
//!
//! let mut client = Client::tcp();
//! let response = client.get("http://example.com/search", Some(&[("q", "rust sockets")]))?;
//! println!("{}", response.code);
//!
//! let response = client.post("http://example.com/form", Some(&[("name", "Ada")]))?;
//! assert!(response.code < 600);
//! # Ok::<(), rawhttp::network::error::Error>(())
//! ```

/// The request/response orchestration.
pub mod client;

/// Query string and form body encoding.
pub mod encoding;

/// Request line and header assembly.
pub mod request;

/// Status line and body parsing.
pub mod response;

/// URL decomposition.
pub mod url;

pub use client::{Client, Options, USER_AGENT};
pub use encoding::Params;
pub use request::{Header, Method, Request};
pub use response::{Failure, Response};
pub use url::{Endpoint, ParsedUrl, UrlError};
