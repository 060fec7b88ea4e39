use std::cmp::min;
use std::io::BufRead;

use crate::common::header::{CONTENT_LENGTH, Header, HeaderMap};
use crate::parse::error::ParsingError;
use crate::parse::limits::Limits;
use crate::parse::line::{LineRead, read_line};
use crate::parse::parse::{Parse, ParseResult};

/// A parsed header block.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Headers {
    /// The headers, names and values lowercased and trimmed.
    pub headers: HeaderMap,
    /// The last content-length seen, or 0 if there was none.
    pub content_length: usize,
}

/// Parser for headers.
pub struct HeadersParser {
    max_line_size: usize,
    max_headers_size: usize,
    headers: HeaderMap,
    content_length: usize,
    read: usize,
}

impl HeadersParser {
    /// Creates a new headers parser.
    pub fn new(limits: &Limits) -> HeadersParser {
        HeadersParser {
            max_line_size: limits.max_line_size,
            max_headers_size: limits.max_headers_size,
            headers: HeaderMap::new(),
            content_length: 0,
            read: 0,
        }
    }

    /// Reads the next line of the block, charging it against the headers size limit.
    fn next_line(&mut self, reader: &mut impl BufRead) -> ParseResult<String> {
        let budget = self.max_headers_size.saturating_sub(self.read);
        let limit = min(self.max_line_size, budget);

        match read_line(reader, limit) {
            Ok(LineRead::Line(line)) => {
                self.read += line.len() + 1;
                Ok(line)
            }
            Ok(LineRead::Eof(partial)) => Err(ParsingError::TruncatedHeaders(partial)),
            Err(ParsingError::LineTooLong { .. }) if budget < self.max_line_size =>
                Err(ParsingError::HeadersTooLarge { limit: self.max_headers_size }),
            Err(err) => Err(err)
        }
    }
}

impl Parse<Headers> for HeadersParser {
    fn parse(mut self, reader: &mut impl BufRead) -> ParseResult<Headers> {
        loop {
            let line = self.next_line(reader)?;
            let line = line.trim();

            if line.is_empty() {
                return Ok(Headers { headers: self.headers, content_length: self.content_length });
            }

            let (header, value) = parse_header(line)?;
            if header == CONTENT_LENGTH {
                self.content_length = parse_content_length(&value)?;
            }
            // last write wins for repeated headers
            self.headers.insert(header, value);
        }
    }
}

/// Parses the given line as a header. Splits the line at the first ':', so values may contain colons.
/// Both the name and the value are trimmed and lowercased.
fn parse_header(raw: &str) -> ParseResult<(Header, String)> {
    let (header_raw, value) = raw.split_once(':')
        .ok_or_else(|| ParsingError::MalformedHeaderLine(raw.to_string()))?;

    Ok((Header::from(header_raw.trim()), value.trim().to_lowercase()))
}

/// Parses a content-length value as a non-negative integer.
fn parse_content_length(value: &str) -> ParseResult<usize> {
    value.parse().map_err(|_| ParsingError::InvalidContentLength(value.to_string()))
}
