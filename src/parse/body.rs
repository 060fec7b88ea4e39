use std::io::{BufRead, ErrorKind};

use crate::parse::error::ParsingError;
use crate::parse::parse::{Parse, ParseResult};

/// Parser for a message body of a known size.
pub struct BodyParser {
    data: Vec<u8>,
    pos: usize,
}

impl BodyParser {
    /// Creates a new body parser for the given content length.
    /// Fails without reading anything if the length is larger than max_body_size.
    pub fn new(content_length: usize, max_body_size: usize) -> Result<BodyParser, ParsingError> {
        if content_length > max_body_size {
            return Err(ParsingError::ContentLengthTooLarge { length: content_length, limit: max_body_size });
        }
        Ok(BodyParser { data: vec![0; content_length], pos: 0 })
    }
}

impl Parse<Vec<u8>> for BodyParser {
    fn parse(mut self, reader: &mut impl BufRead) -> ParseResult<Vec<u8>> {
        while self.pos < self.data.len() {
            match reader.read(&mut self.data[self.pos..]) {
                Ok(0) => return Err(ParsingError::TruncatedBody { expected: self.data.len(), received: self.pos }),
                Ok(amt) => self.pos += amt,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into())
            }
        }

        Ok(self.data)
    }
}
