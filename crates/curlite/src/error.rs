use std::io;

pub type Result<T> = core::result::Result<T, Error>;

/// Every failure aborts the run; nothing here is retried.
#[derive(Debug)]
pub enum Error {
    /// Number of positional URLs that were given, when it is not exactly one.
    ArgumentCount(usize),
    UrlParse(::url::ParseError),
    UnsupportedProtocol(String),
    /// Scheme without a known default port and no explicit port in the URL.
    MissingPort(String),
    InvalidHeaderFormat(String),
    Connection {
        addr: String,
        source: io::Error,
    },
    Send(io::Error),
    Output(io::Error),
}

impl Error {
    pub fn invalid_header<S: Into<String>>(raw: S) -> Self {
        Self::InvalidHeaderFormat(raw.into())
    }

    pub fn connection<S: Into<String>>(addr: S, source: io::Error) -> Self {
        Self::Connection {
            addr: addr.into(),
            source,
        }
    }
}

impl From<::url::ParseError> for Error {
    fn from(e: ::url::ParseError) -> Self {
        Self::UrlParse(e)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::UrlParse(e) => Some(e),
            Error::Connection { source, .. } => Some(source),
            Error::Send(e) | Error::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ArgumentCount(_) => write!(f, "error: exactly one URL must be provided"),
            Error::UrlParse(e) => write!(f, "Error parsing URL: {e}"),
            Error::UnsupportedProtocol(_) => write!(f, "Error: Only HTTP protocol is supported"),
            Error::MissingPort(scheme) => write!(f, "error: no port known for scheme '{scheme}'"),
            Error::InvalidHeaderFormat(raw) => {
                write!(f, "invalid header format: {raw}. Expected 'Key: Value'")
            }
            Error::Connection { addr, source } => write!(f, "error connecting to {addr}: {source}"),
            Error::Send(e) => write!(f, "error sending request: {e}"),
            Error::Output(e) => write!(f, "error writing output: {e}"),
        }
    }
}
