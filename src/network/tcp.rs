//! Blocking TCP transport.
//!
//! No read or connect timeout is set: a peer that never answers, or never
//! closes its end, stalls the calling thread.

use std::io::{self, ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream};

use log::debug;

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};

/// Opens plain TCP connections through the operating system's socket API.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    /// Creates a connector.
    pub fn new() -> Self {
        Self
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        debug!("connecting to {}:{}", host, port);
        let stream = TcpStream::connect((host, port)).map_err(|e| connect_error(&e))?;
        Ok(TcpConnection { stream })
    }
}

/// A connected TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.read(buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                    return Err(Error::Timeout);
                }
                Err(_) => return Err(Error::ReadError),
                Ok(n) => return Ok(n),
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.write(buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return Err(Error::WriteError),
                Ok(n) => return Ok(n),
            }
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            // The peer already tore the stream down, which is the normal case
            // after a `Connection: close` response.
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(_) => Err(Error::CloseError),
            Ok(()) => Ok(()),
        }
    }
}

impl Connection for TcpConnection {}

fn connect_error(e: &io::Error) -> Error {
    debug!("connect failed: {}", e);
    match e.kind() {
        ErrorKind::ConnectionRefused => Error::ConnectionRefused,
        ErrorKind::TimedOut => Error::Timeout,
        _ => Error::InvalidAddress,
    }
}
