use std::io::{BufRead, Read};

use crate::parse::error::ParsingError;

/// The result of reading up to a '\n'.
#[derive(Debug, Eq, PartialEq)]
pub enum LineRead {
    /// A full line, without its '\n' terminator.
    Line(String),
    /// The stream ended before a '\n'. Holds whatever was read.
    Eof(String),
}

/// Reads one '\n' terminated line, reading at most `limit` bytes (terminator included).
/// The '\r' of a CRLF ending is left in place for the caller to trim.
/// A line that fills the limit right before the stream ends is reported as `Eof`, not as too long.
pub fn read_line(reader: &mut impl BufRead, limit: usize) -> Result<LineRead, ParsingError> {
    let mut buf = Vec::new();
    reader.by_ref().take(limit as u64).read_until(b'\n', &mut buf)?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
        String::from_utf8(buf).map(LineRead::Line).map_err(|_| ParsingError::InvalidUtf8)
    } else if buf.len() >= limit && !reader.fill_buf()?.is_empty() {
        Err(ParsingError::LineTooLong { limit })
    } else {
        Ok(LineRead::Eof(String::from_utf8_lossy(&buf).into_owned()))
    }
}
