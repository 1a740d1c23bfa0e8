//! Minimal HTTP/1.1 client over a plain TCP socket.
//!
//! URL string -> [`UrlComponents`] -> [`Headers`] -> request bytes ->
//! [`transport::send`] -> raw response bytes, printed as received.

use std::io::Write;

mod cmd;
mod common;
mod r#const;
mod error;
mod init;
mod request;
mod resolver;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use cmd::{Args, HeadersArg, RequestOptions};
pub use common::{Header, Headers, Method, ParseMethodError};
pub use error::{Error, Result};
pub use request::{ReqBuilder, assemble, serialize};
pub use resolver::{UrlComponents, resolve};

use crate::{
    r#const::{HTTP_SCHEME, HTTP_VERSION},
    transport::ReadEnd,
};

pub fn run() -> anyhow::Result<()> {
    let opts = init::cmd::init()?;
    let stdout = std::io::stdout();
    execute(&opts, &mut stdout.lock())?;
    Ok(())
}

/// Drive one request and write the summary and the raw response to `out`.
///
/// Nothing touches the network until the URL, the scheme and every header
/// have been accepted.
pub fn execute<W: Write>(opts: &RequestOptions, out: &mut W) -> Result<()> {
    let target = resolve(&opts.url)?;
    log::debug!("resolved {target:?}");

    if target.protocol != HTTP_SCHEME {
        return Err(Error::UnsupportedProtocol(target.protocol));
    }

    let headers = assemble(&target.host, opts.headers.iter(), &opts.data)?;
    log::debug!("assembled {} headers for {}", headers.iter().count(), target.host);
    let addr = target.host_port()?;

    out.write_all(summary(&target, &opts.method, &headers).as_bytes())
        .map_err(Error::Output)?;

    let req = serialize(&opts.method, &target.path, &headers, &opts.data);
    let response = transport::send(&addr, &req)?;
    if let ReadEnd::Interrupted(cause) = response.end() {
        log::warn!("response from {addr} may be truncated: {cause}");
    }

    out.write_all(response.raw())
        .and_then(|_| out.flush())
        .map_err(Error::Output)
}

fn summary(target: &UrlComponents, method: &Method, headers: &Headers) -> String {
    let mut text = format!(
        "Connecting to {}\nSending request {} {} {}\n",
        target.host, method, target.path, HTTP_VERSION
    );
    for h in headers {
        text.push_str(&h.to_string());
        text.push('\n');
    }
    text.push('\n');
    text
}
