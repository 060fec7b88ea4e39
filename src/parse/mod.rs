use std::io::BufRead;

pub use error::ParsingError;
pub use limits::Limits;
pub use message::RequestParser;
pub use parse::{Parse, ParseResult};

use crate::common::message::Message;

/// Parsing errors.
pub mod error;
/// Parse trait and other basic parsing types.
pub mod parse;
/// Size limits for parsing.
pub mod limits;

/// Reader for '\n' terminated lines.
mod line;
/// Parser for the request line.
mod request_line;
/// Parser for headers.
mod headers;
/// Parser for message bodies.
mod body;
/// Request parser, composing the request line, headers, and body parsers.
mod message;

/// Utility for testing parsers.
#[cfg(test)]
mod test_util;

/// Parses exactly one request from the reader using the default limits.
/// Blocks on the reader as needed. Nothing past the end of the request body is consumed from
/// the reader, though a buffered reader may have already pulled it into its buffer.
pub fn parse_request(reader: &mut impl BufRead) -> ParseResult<Message> {
    RequestParser::new().parse(reader)
}
