//! # rawhttp - HTTP/1.1 over raw sockets
//!
//! A minimal HTTP/1.1 client that performs `GET` and `POST` requests by
//! writing the request bytes itself and parsing the response bytes itself.
//! It exists to show exactly what goes over the wire.
//!
//! ## Layers
//!
//! - [`network`]: byte-stream traits ([`Connect`](network::Connect),
//!   [`Connection`](network::Connection)) plus a blocking TCP implementation
//!   behind the `std` feature.
//! - [`network::application::http`]: URL resolution, percent-encoding,
//!   request building, response parsing and the [`Client`] tying them
//!   together.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rawhttp::Client;
//!
//! let mut client = Client::tcp();
//! let response = client.dispatch("http://example.com/", "GET", None)?;
//! println!("{}", response);
//! # Ok::<(), rawhttp::network::error::Error>(())
//! ```
//!
//! Any transport can be plugged in by implementing the traits in
//! [`network`]:
//!
//! ```rust
//! use rawhttp::Client;
//! use rawhttp::network::{Close, Connect, Connection, Read, Write};
//! use rawhttp::network::error::Error;
//!
//! struct Canned(&'static [u8]);
//!
//! impl Read for Canned {
//!     type Error = Error;
//!     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
//!         let n = buf.len().min(self.0.len());
//!         buf[..n].copy_from_slice(&self.0[..n]);
//!         self.0 = &self.0[n..];
//!         Ok(n)
//!     }
//! }
//! impl Write for Canned {
//!     type Error = Error;
//!     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//!     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! }
//! impl Close for Canned {
//!     type Error = Error;
//!     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! }
//! impl Connection for Canned {}
//!
//! struct CannedNetwork;
//!
//! impl Connect for CannedNetwork {
//!     type Connection = Canned;
//!     type Error = Error;
//!     fn connect(&mut self, _host: &str, _port: u16) -> Result<Canned, Error> {
//!         Ok(Canned(b"HTTP/1.1 200 OK\r\n\r\nhello"))
//!     }
//! }
//!
//! let mut client = Client::new(CannedNetwork);
//! let response = client.get("http://example.com/", None).unwrap();
//! assert_eq!(response.code, 200);
//! assert_eq!(response.body, "hello");
//! ```
//!
//! ## Optional Features
//!
//! - `std` (default): blocking TCP transport and `std::error::Error` impls
//! - `defmt`: `defmt::Format` impls for the error types

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

/// Transport traits, transport errors and the protocol clients built on them.
pub mod network;

pub use network::application::http::{Client, Response};
