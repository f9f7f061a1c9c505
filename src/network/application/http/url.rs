//! URL decomposition into connection parameters.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

/// Port used for `http` URLs that do not name one.
pub const HTTP_DEFAULT_PORT: u16 = 80;
/// Port used for `https` URLs that do not name one.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Why a URL cannot be turned into a connection target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    /// The URL has no authority component, or its host is empty.
    MissingHost,
    /// No explicit port, and the scheme has no default port.
    UnresolvedPort,
    /// The explicit port is not a decimal number in `0..=65535`.
    InvalidPort,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::MissingHost => f.write_str("url has no host"),
            UrlError::UnresolvedPort => f.write_str("url has no port and scheme has no default"),
            UrlError::InvalidPort => f.write_str("url port is not a valid number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlError {}

#[cfg(feature = "defmt")]
impl defmt::Format for UrlError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            UrlError::MissingHost => defmt::write!(f, "MissingHost"),
            UrlError::UnresolvedPort => defmt::write!(f, "UnresolvedPort"),
            UrlError::InvalidPort => defmt::write!(f, "InvalidPort"),
        }
    }
}

/// The pieces of an absolute URL this client cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme, empty when the URL has none.
    pub scheme: String,
    /// User name from the userinfo component.
    pub username: Option<String>,
    /// Password from the userinfo component.
    pub password: Option<String>,
    /// Lowercased host, without IPv6 brackets.
    pub hostname: Option<String>,
    /// Explicit port, if the URL names one.
    pub port: Option<u16>,
    /// Path, never empty (`/` when the URL has none).
    pub path: String,
    /// Query without the leading `?`.
    pub query: Option<String>,
}

/// Where to open the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// Host name or address literal.
    pub host: &'a str,
    /// Effective port.
    pub port: u16,
}

impl ParsedUrl {
    /// Splits `url` into its components.
    ///
    /// Only a malformed explicit port makes this fail; a missing host is
    /// reported later by [`ParsedUrl::endpoint`].
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let (scheme, rest) = split_scheme(url);

        let (netloc, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let mut parsed = ParsedUrl {
            scheme,
            username: None,
            password: None,
            hostname: None,
            port: None,
            path: if path.is_empty() { "/".to_owned() } else { path.to_owned() },
            query: query.filter(|q| !q.is_empty()).map(ToOwned::to_owned),
        };

        if let Some(netloc) = netloc {
            let host_port = match netloc.rsplit_once('@') {
                Some((userinfo, host_port)) => {
                    match userinfo.split_once(':') {
                        Some((user, pass)) => {
                            parsed.username = Some(user.to_owned());
                            parsed.password = Some(pass.to_owned());
                        }
                        None => parsed.username = Some(userinfo.to_owned()),
                    }
                    host_port
                }
                None => netloc,
            };

            let (host, port) = split_host_port(host_port);
            if !host.is_empty() {
                parsed.hostname = Some(host.to_ascii_lowercase());
            }
            parsed.port = match port {
                Some(port) if !port.is_empty() => Some(parse_port(port)?),
                _ => None,
            };
        }

        Ok(parsed)
    }

    /// The explicit port, or the scheme default for `http`/`https`.
    pub fn effective_port(&self) -> Option<u16> {
        self.port.or(match self.scheme.as_str() {
            "http" => Some(HTTP_DEFAULT_PORT),
            "https" => Some(HTTPS_DEFAULT_PORT),
            _ => None,
        })
    }

    /// The host and port to connect to.
    pub fn endpoint(&self) -> Result<Endpoint<'_>, UrlError> {
        let host = self.hostname.as_deref().ok_or(UrlError::MissingHost)?;
        let port = self.effective_port().ok_or(UrlError::UnresolvedPort)?;
        Ok(Endpoint { host, port })
    }

    /// Path plus the URL's own query, as it goes on the request line.
    pub fn request_target(&self) -> String {
        let mut target = self.path.clone();
        if let Some(query) = &self.query {
            target.push('?');
            target.push_str(query);
        }
        target
    }

    /// `(user, password)` when the URL carries userinfo.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.username
            .as_deref()
            .map(|user| (user, self.password.as_deref().unwrap_or("")))
    }
}

/// Value for the `Host` header. The port is always present; IPv6 literals are
/// bracketed again.
pub fn host_header(endpoint: &Endpoint<'_>) -> String {
    if endpoint.host.contains(':') {
        alloc::format!("[{}]:{}", endpoint.host, endpoint.port)
    } else {
        alloc::format!("{}:{}", endpoint.host, endpoint.port)
    }
}

fn split_scheme(url: &str) -> (String, &str) {
    if let Some((candidate, rest)) = url.split_once(':') {
        let mut chars = candidate.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid {
            return (candidate.to_ascii_lowercase(), rest);
        }
    }
    (String::new(), url)
}

fn split_host_port(host_port: &str) -> (&str, Option<&str>) {
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return match bracketed.split_once(']') {
            Some((host, after)) => (host, after.strip_prefix(':')),
            None => (bracketed, None),
        };
    }
    match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    }
}

fn parse_port(port: &str) -> Result<u16, UrlError> {
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UrlError::InvalidPort);
    }
    port.parse::<u16>().map_err(|_| UrlError::InvalidPort)
}
