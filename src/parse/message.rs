use std::io::BufRead;

use crate::common::message::{Message, RequestLine, StartLine};
use crate::parse::body::BodyParser;
use crate::parse::headers::{Headers, HeadersParser};
use crate::parse::limits::Limits;
use crate::parse::message::State::{Body, Finished, FirstLine, HeaderBlock};
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::request_line::RequestLineParser;

/// Parser for one complete request: request line, header block, then a content-length sized body.
/// Makes a single forward pass over the reader and never reads past the end of the body.
pub struct RequestParser {
    limits: Limits,
    state: State,
}

impl RequestParser {
    /// Creates a new request parser with the default limits.
    pub fn new() -> RequestParser {
        RequestParser::with_limits(Limits::default())
    }

    /// Creates a new request parser with the given limits.
    pub fn with_limits(limits: Limits) -> RequestParser {
        RequestParser { state: FirstLine(RequestLineParser::new(limits.max_line_size)), limits }
    }
}

impl Default for RequestParser {
    fn default() -> Self {
        RequestParser::new()
    }
}

/// The state of a request parser.
enum State {
    /// Parsing the request line.
    FirstLine(RequestLineParser),
    /// Parsing the headers.
    HeaderBlock(RequestLine, HeadersParser),
    /// Parsing the body.
    Body(RequestLine, Headers, BodyParser),
    /// Parsing is complete.
    Finished(Message),
}

impl Parse<Message> for RequestParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Message> {
        let Self { mut state, limits } = self;

        loop {
            state = match state {
                FirstLine(parser) => HeaderBlock(parser.parse(reader)?, HeadersParser::new(&limits)),
                HeaderBlock(request_line, parser) => {
                    let headers = parser.parse(reader)?;
                    let body_parser = BodyParser::new(headers.content_length, limits.max_body_size)?;
                    Body(request_line, headers, body_parser)
                }
                Body(request_line, headers, parser) => Finished(Message {
                    start: StartLine::Request(request_line),
                    headers: headers.headers,
                    body: parser.parse(reader)?,
                }),
                Finished(message) => return Ok(message)
            };
        }
    }
}
