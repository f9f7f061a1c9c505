//! Common error types for network operations

use core::fmt;

/// A common error type for network operations.
///
/// These are transport faults: once one of them occurs the request cannot
/// produce a [`Response`](crate::network::application::http::Response), so
/// the HTTP client hands it back to the caller untranslated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// An invalid address was provided, or the host name could not be resolved.
    InvalidAddress,
    /// The connection could not be shut down cleanly.
    CloseError,
    /// A protocol-specific error occurred.
    ProtocolError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::WriteError => "failed to write to connection",
            Error::ReadError => "failed to read from connection",
            Error::ConnectionRefused => "connection refused",
            Error::Timeout => "operation timed out",
            Error::InvalidAddress => "invalid or unresolvable address",
            Error::CloseError => "failed to close connection",
            Error::ProtocolError => "protocol error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::CloseError => defmt::write!(f, "CloseError"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
        }
    }
}
