//! Byte-stream transport layer.
//!
//! The HTTP client never touches a socket directly. It talks to anything that
//! implements [`Connect`], and the [`Connection`] it hands back is used for a
//! single request/response exchange and then closed by value.
//!

#![deny(unsafe_code)]

use alloc::string::String;
use alloc::vec::Vec;

use log::error;

use self::error::Error;

/// Common error types for network operations
pub mod error;

/// Application layer protocols built on the transport traits
pub mod application;

/// Blocking TCP transport backed by `std::net`
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of the transport traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

/// Reads bytes from a connection.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` means the peer closed its end.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Writes bytes to a connection.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection, returning how many bytes were accepted
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Releases a connection.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `host` on `port`
    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error>;
}

/// Writes the whole of `data`, retrying partial writes, then flushes.
///
/// A write that accepts zero bytes is treated as a failure, otherwise the loop
/// could never make progress.
pub fn send_all<C: Write>(connection: &mut C, data: &[u8]) -> Result<(), Error> {
    let mut sent = 0;
    while sent < data.len() {
        match connection.write(&data[sent..]) {
            Ok(0) => {
                error!("connection accepted 0 bytes after {} of {}", sent, data.len());
                return Err(Error::WriteError);
            }
            Ok(n) => sent += n,
            Err(e) => {
                error!("write failed after {} of {} bytes: {:?}", sent, data.len(), e);
                return Err(Error::WriteError);
            }
        }
    }
    connection.flush().map_err(|e| {
        error!("flush failed: {:?}", e);
        Error::WriteError
    })
}

/// Reads until the peer closes its end of the stream.
///
/// Only a zero-length read ends the loop, so this returns once the server has
/// shut the connection down. Every request this crate sends carries
/// `Connection: close` for exactly that reason. The bytes are decoded as
/// UTF-8, with invalid sequences replaced by U+FFFD.
pub fn receive_all<C: Read>(connection: &mut C, chunk_size: usize) -> Result<String, Error> {
    let mut buffer = Vec::new();
    let mut chunk = alloc::vec![0u8; chunk_size.max(1)];
    loop {
        match connection.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) => {
                error!("read failed after {} bytes: {:?}", buffer.len(), e);
                return Err(Error::ReadError);
            }
        }
    }
    Ok(match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
