//! # Application Layer Network Protocols
//!
//! Protocol implementations that sit on top of the byte-stream traits in
//! [`crate::network`]. Each protocol client is connection agnostic: it works
//! with any [`Connect`](crate::network::Connect) implementation, which keeps
//! the wire logic testable against scripted in-memory connections.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 GET and POST client, one request per connection

/// HTTP client implementation.
///
/// Provides a minimal HTTP/1.1 client that builds the request bytes and
/// parses the response bytes itself, supporting GET and POST with
/// percent-encoded query strings and form bodies.
pub mod http;
