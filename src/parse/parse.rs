use std::io::BufRead;

use crate::parse::error::ParsingError;

/// The result of a parse call. Contains either the fully parsed value or the error that stopped the parser.
pub type ParseResult<T> = Result<T, ParsingError>;

/// Trait for parsing a value out of a blocking reader in a single forward pass.
pub trait Parse<T>: Sized {
    /// Reads data from the reader until either a value can be parsed or an error is encountered.
    /// The parser is consumed either way. Reads block for as long as the reader blocks; any
    /// timeout belongs to the reader.
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<T>;
}
