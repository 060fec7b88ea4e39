use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::net::SocketAddr;

use crate::common::message::Message;
use crate::parse::{Limits, Parse, ParsingError, RequestParser};
use crate::server::connection::ReadRequestResult::{Closed, Error, Ready};
use crate::util::stream::Stream;

/// Size of connection read buffers.
const READ_BUF_SIZE: usize = 4096;

/// The result of attempting to read a request.
#[derive(Debug)]
pub enum ReadRequestResult {
    /// A new request has been parsed.
    Ready(Message),
    /// An error occurred while trying to read a request.
    Error(ParsingError),
    /// The connection was closed before any data arrived. A reset after data arrived is an `Error`.
    Closed,
}

/// A connection to a client. Serves exactly one request: read it, write one response, close.
pub struct Connection<S: Stream> {
    /// The address of the client.
    pub addr: SocketAddr,
    stream: BufReader<S>,
    limits: Limits,
}

impl<S: Stream> Connection<S> {
    /// Creates a new connection out of the given address and stream.
    pub fn new(addr: SocketAddr, stream: S, limits: Limits) -> Connection<S> {
        Connection {
            addr,
            stream: BufReader::with_capacity(READ_BUF_SIZE, stream),
            limits,
        }
    }

    /// Reads and parses the request from the underlying stream, blocking until it is complete.
    pub fn read_request(&mut self) -> ReadRequestResult {
        match self.stream.fill_buf() {
            Ok([]) => return Closed,
            Ok(_) => {}
            Err(err) if is_closed(&err) => return Closed,
            Err(err) => return Error(err.into())
        }

        match RequestParser::with_limits(self.limits).parse(&mut self.stream) {
            Ok(request) => Ready(request),
            Err(err) => Error(err)
        }
    }
}

impl<S: Stream> Write for Connection<S> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stream.get_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stream.get_mut().flush()
    }
}

/// Checks if the given IO error indicates the peer went away.
fn is_closed(error: &std::io::Error) -> bool {
    matches!(error.kind(), ErrorKind::ConnectionAborted | ErrorKind::ConnectionReset | ErrorKind::BrokenPipe)
}
