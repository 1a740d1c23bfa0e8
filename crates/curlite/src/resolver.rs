//! Turns a raw URL string into the pieces needed to open a socket and write
//! a request line. No I/O happens here.

use ::url::Url;

use crate::{
    error::{Error, Result},
    r#const::{HTTP_PORT, HTTP_SCHEME, HTTPS_PORT, HTTPS_SCHEME},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    pub protocol: String,
    /// Host without the port. IPv6 literals keep their brackets.
    pub host: String,
    /// `None` only for schemes with no known default and no explicit port.
    pub port: Option<String>,
    /// Never empty; carries the raw query after a `?` when one is present.
    /// Taken from the input as typed, so dot segments and escapes survive.
    pub path: String,
    /// Parsed but never sent.
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// `host:port`, ready for `TcpStream::connect`.
    pub fn host_port(&self) -> Result<String> {
        self.port
            .as_deref()
            .map(|port| format!("{}:{}", self.host, port))
            .ok_or_else(|| Error::MissingPort(self.protocol.clone()))
    }
}

pub fn resolve(raw: &str) -> Result<UrlComponents> {
    let raw = raw.trim();
    let parsed = Url::parse(raw)?;
    let protocol = parsed.scheme().to_string();

    // `Url::port` hides a port equal to the scheme default, so the fallback
    // below puts it back.
    let port = parsed
        .port()
        .map(|p| p.to_string())
        .or_else(|| default_port(&protocol).map(String::from));

    let (raw_path, query) = split_path_and_query(raw, parsed.has_host());
    let mut path = match raw_path {
        "" => "/".to_string(),
        p => p.to_string(),
    };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        path.push('?');
        path.push_str(query);
    }

    Ok(UrlComponents {
        host: parsed.host_str().unwrap_or_default().to_string(),
        port,
        path,
        fragment: parsed.fragment().map(String::from),
        protocol,
    })
}

/// `Url::path` resolves `.`/`..` segments (encoded ones too), so the path
/// and query are cut out of the validated input instead.
fn split_path_and_query(raw: &str, has_authority: bool) -> (&str, Option<&str>) {
    let rest = raw.split_once(':').map_or(raw, |(_, rest)| rest);
    let rest = if has_authority {
        let rest = rest.trim_start_matches(['/', '\\']);
        let end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
        &rest[end..]
    } else {
        rest
    };
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);

    match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    }
}

fn default_port(scheme: &str) -> Option<&'static str> {
    match scheme {
        HTTP_SCHEME => Some(HTTP_PORT),
        HTTPS_SCHEME => Some(HTTPS_PORT),
        _ => None,
    }
}
