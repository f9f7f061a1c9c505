use log::{debug, error, trace, warn};

use super::encoding::Params;
use super::request::{Method, Request};
use super::response::{Failure, Response};
use super::url::ParsedUrl;
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, receive_all, send_all};

/// Product token sent in the `User-Agent` header.
pub const USER_AGENT: &str = concat!("rawhttp/", env!("CARGO_PKG_VERSION"));

/// Size of each read while draining a response.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Options for configuring the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options<'a> {
    /// Value of the `User-Agent` header.
    pub user_agent: &'a str,
    /// Number of bytes requested per read.
    pub read_chunk_size: usize,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// An HTTP/1.1 client that opens one connection per request.
///
/// The client holds no socket between calls. Each request resolves the URL,
/// connects, sends, reads until the server closes the stream, closes its side
/// and only then parses what it received. Conditions a caller is expected to
/// branch on (bad URL, malformed or empty reply) come back as a [`Response`]
/// with code 400, 500 or 505. Transport faults are returned as [`Error`].
#[derive(Debug)]
pub struct Client<'a, N: Connect> {
    connector: N,
    options: Options<'a>,
}

impl<N> Client<'static, N>
where
    N: Connect,
    Error: From<N::Error>,
{
    /// Creates a client with default [`Options`].
    pub fn new(connector: N) -> Self {
        Self::with_options(connector, Options::default())
    }
}

impl<'a, N> Client<'a, N>
where
    N: Connect,
    Error: From<N::Error>,
{
    /// Creates a client with the given options.
    pub fn with_options(connector: N, options: Options<'a>) -> Self {
        Self { connector, options }
    }

    /// The connector requests are sent through.
    pub fn connector(&self) -> &N {
        &self.connector
    }

    /// Sends a `GET`, appending `query` to the URL when given.
    pub fn get(&mut self, url: &str, query: Option<Params<'_>>) -> Result<Response, Error> {
        self.request(url, Method::Get, query)
    }

    /// Sends a `POST`, with `form` as a form-encoded body when given.
    pub fn post(&mut self, url: &str, form: Option<Params<'_>>) -> Result<Response, Error> {
        self.request(url, Method::Post, form)
    }

    /// Routes to [`Client::post`] for `POST` and to [`Client::get`] for any
    /// other method name.
    pub fn dispatch(
        &mut self,
        url: &str,
        method: &str,
        params: Option<Params<'_>>,
    ) -> Result<Response, Error> {
        self.request(url, Method::from_name(method), params)
    }

    /// Performs one full request/response exchange.
    pub fn request(
        &mut self,
        url: &str,
        method: Method,
        params: Option<Params<'_>>,
    ) -> Result<Response, Error> {
        let parsed = match ParsedUrl::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("rejecting {}: {}", url, e);
                return Ok(Failure::InvalidUrl.into());
            }
        };
        let endpoint = match parsed.endpoint() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                debug!("rejecting {}: {}", url, e);
                return Ok(Failure::InvalidUrl.into());
            }
        };
        if parsed.scheme == "https" {
            warn!("{} uses https but requests are sent as plain text", url);
        }

        let request = match method {
            Method::Get => Request::get(&parsed, &endpoint, params, self.options.user_agent)?,
            Method::Post => Request::post(&parsed, &endpoint, params, self.options.user_agent)?,
        };
        debug!("{} -> {}:{}", request.request_line(), endpoint.host, endpoint.port);

        let mut connection = self.connector.connect(endpoint.host, endpoint.port).map_err(|e| {
            error!("connect to {}:{} failed: {:?}", endpoint.host, endpoint.port, e);
            Error::from(e)
        })?;
        let received = exchange(&mut connection, &request, self.options.read_chunk_size);
        let closed = connection.close();

        let raw = received?;
        closed.map_err(|e| {
            error!("close failed: {:?}", e);
            Error::CloseError
        })?;

        if raw.is_empty() {
            debug!("peer closed without a response");
            return Ok(Failure::EmptyResponse.into());
        }
        trace!("raw response:\n{}", raw);
        Ok(Response::parse(&raw))
    }
}

fn exchange<C: Connection>(
    connection: &mut C,
    request: &Request,
    chunk_size: usize,
) -> Result<alloc::string::String, Error> {
    send_all(connection, &request.to_bytes())?;
    receive_all(connection, chunk_size)
}

#[cfg(feature = "std")]
impl Client<'static, crate::network::tcp::TcpConnector> {
    /// Creates a client that talks TCP through the operating system.
    pub fn tcp() -> Self {
        Self::new(crate::network::tcp::TcpConnector::new())
    }
}
