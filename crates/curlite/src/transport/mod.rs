use std::{
    io::{BufRead, BufReader, Write},
    net::TcpStream,
};

use crate::error::{Error, Result};

/// How the read loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEnd {
    /// The peer closed the stream.
    Closed,
    /// A read failed after `raw` was collected; the text may be truncated.
    Interrupted(String),
}

/// Bytes exactly as they came off the socket; never decoded.
#[derive(Debug, Clone)]
pub struct Response {
    raw: Vec<u8>,
    end: ReadEnd,
}

impl Response {
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn end(&self) -> &ReadEnd {
        &self.end
    }
}

/// Open one connection to `addr`, write `request` in full, then read until
/// the server hangs up. The stream is dropped on every return path.
///
/// There is no deadline: a peer that neither sends nor closes blocks forever.
pub fn send(addr: &str, request: &[u8]) -> Result<Response> {
    log::debug!("connecting to {addr}");
    let mut stream = TcpStream::connect(addr).map_err(|e| Error::connection(addr, e))?;
    log::info!("connected {addr} (local {:?})", stream.local_addr().ok());

    stream.write_all(request).map_err(Error::Send)?;
    stream.flush().map_err(Error::Send)?;
    log::debug!("sent {} bytes", request.len());

    let response = recv(BufReader::new(stream));
    log::debug!("received {} bytes, {:?}", response.raw.len(), response.end);
    Ok(response)
}

/// Line-oriented read until EOF. A read error ends the loop the same way
/// EOF does, keeping whatever already arrived.
pub fn recv<R: BufRead>(mut reader: R) -> Response {
    let mut buf: Vec<u8> = Vec::with_capacity(2048);
    let end = loop {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break ReadEnd::Closed,
            Ok(_) => continue,
            Err(e) => break ReadEnd::Interrupted(e.to_string()),
        }
    };

    Response { raw: buf, end }
}
