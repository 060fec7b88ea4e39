use thiserror::Error;

use crate::common::method::InvalidMethod;

/// Error for when an HTTP request can't be parsed.
/// Variants carry the offending raw text where there is some, so they can be logged as-is.
#[derive(Debug, Error)]
pub enum ParsingError {
    /// The request line is missing tokens, or the stream ended before it was complete.
    #[error("malformed request line '{0}'")]
    MalformedRequestLine(String),
    /// Method is unrecognized.
    #[error("{0}")]
    InvalidMethod(#[from] InvalidMethod),
    /// Request line names an HTTP version this server doesn't speak.
    #[error("unsupported http version '{0}'")]
    UnsupportedVersion(String),
    /// The stream ended before the blank line closing the header block. Carries the partial line.
    #[error("stream ended inside the header block at '{0}'")]
    TruncatedHeaders(String),
    /// A header line has no colon.
    #[error("malformed header line '{0}'")]
    MalformedHeaderLine(String),
    /// Content length is not a non-negative integer.
    #[error("invalid content-length '{0}'")]
    InvalidContentLength(String),
    /// The stream ended before the declared body length was read.
    #[error("body truncated after {received} of {expected} bytes")]
    TruncatedBody { expected: usize, received: usize },
    /// A single line is longer than the line size limit.
    #[error("line exceeds {limit} bytes")]
    LineTooLong { limit: usize },
    /// The header block is larger than the headers size limit.
    #[error("headers exceed {limit} bytes")]
    HeadersTooLarge { limit: usize },
    /// Content length exceeds the body size limit.
    #[error("content-length {length} exceeds limit of {limit} bytes")]
    ContentLengthTooLarge { length: usize, limit: usize },
    /// Request line or header line is not valid UTF8.
    #[error("request line or header is not valid utf8")]
    InvalidUtf8,
    /// Reading from the underlying stream failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}
