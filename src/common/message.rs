use std::fmt::{Display, Formatter};
use std::io::Write;

use crate::common::header::{CONTENT_LENGTH, Header, HeaderMap};
use crate::common::method::Method;
use crate::common::status::StatusLine;
use crate::common::version::HTTP_VERSION_1_1;

/// The first line of an incoming request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RequestLine {
    /// The method.
    pub method: Method,
    /// The raw request target, exactly as it appeared on the wire.
    pub path: String,
    /// The HTTP version. Parsed requests are always stamped "HTTP/1.1".
    pub version: &'static str,
}

impl RequestLine {
    /// Creates an HTTP/1.1 request line.
    pub fn new(method: Method, path: impl Into<String>) -> RequestLine {
        RequestLine { method, path: path.into(), version: HTTP_VERSION_1_1 }
    }
}

impl Display for RequestLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.method, self.path, self.version)
    }
}

/// The first line of a message. A request line for messages travelling to the server, a status
/// line for messages travelling back to the client.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StartLine {
    Request(RequestLine),
    Status(StatusLine),
}

impl Display for StartLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StartLine::Request(line) => line.fmt(f),
            StartLine::Status(line) => line.fmt(f)
        }
    }
}

/// An HTTP message, either a parsed request or a response being built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Message {
    /// The start line.
    pub start: StartLine,
    /// The headers.
    pub headers: HeaderMap,
    /// The body.
    pub body: Vec<u8>,
}

impl Message {
    /// Creates a request message with no headers or body.
    pub fn request(line: RequestLine) -> Message {
        Message { start: StartLine::Request(line), headers: HeaderMap::new(), body: vec![] }
    }

    /// Creates a response message with no headers or body.
    pub fn response(line: StatusLine) -> Message {
        Message { start: StartLine::Status(line), headers: HeaderMap::new(), body: vec![] }
    }

    /// Sets a header, replacing any previous value.
    pub fn with_header(mut self, header: impl Into<Header>, value: impl Into<String>) -> Message {
        self.headers.insert(header.into(), value.into());
        self
    }

    /// Sets the body. Does not touch the content-length header.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Message {
        self.body = body.into();
        self
    }

    /// Sets the body along with a matching content-length header.
    pub fn with_sized_body(self, body: impl Into<Vec<u8>>) -> Message {
        let body = body.into();
        let length = body.len().to_string();
        self.with_body(body).with_header(CONTENT_LENGTH, length)
    }

    /// The request line, if this is a request.
    pub fn request_line(&self) -> Option<&RequestLine> {
        match &self.start {
            StartLine::Request(line) => Some(line),
            StartLine::Status(_) => None
        }
    }

    /// The status line, if this is a response.
    pub fn status_line(&self) -> Option<&StatusLine> {
        match &self.start {
            StartLine::Status(line) => Some(line),
            StartLine::Request(_) => None
        }
    }

    /// Converts the message to its wire bytes: the start line, each header in map order, a blank
    /// line, then the body.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64 + self.body.len());
        // writing into a Vec can't fail
        let _ = self.write_unflushed(&mut buf);
        buf
    }

    /// Writes the message as bytes to the given writer and flushes it.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        self.write_unflushed(writer)?;
        writer.flush()
    }

    fn write_unflushed(&self, writer: &mut impl Write) -> std::io::Result<()> {
        // write! will call write multiple times and does not flush
        write!(writer, "{}\r\n", self.start)?;
        for (header, value) in self.headers.iter() {
            write!(writer, "{}: {}\r\n", header, value)?;
        }
        writer.write_all(b"\r\n")?;
        if !self.body.is_empty() {
            writer.write_all(&self.body)?;
        }
        Ok(())
    }
}
