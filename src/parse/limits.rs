/// Default max size in bytes of a single request or header line.
pub const DEFAULT_MAX_LINE_SIZE: usize = 8 * 1024;

/// Default max size in bytes for all header lines of a request.
pub const DEFAULT_MAX_HEADERS_SIZE: usize = 64 * 1024;

/// Default max size of a body.
pub const DEFAULT_MAX_BODY_SIZE: usize = 3 * 1024 * 1024; // 3 megabytes

/// Size limits applied while parsing one request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    /// Max bytes in the request line or any one header line, line terminator included.
    pub max_line_size: usize,
    /// Max bytes across all header lines, terminators included.
    pub max_headers_size: usize,
    /// Max content-length accepted.
    pub max_body_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_line_size: DEFAULT_MAX_LINE_SIZE,
            max_headers_size: DEFAULT_MAX_HEADERS_SIZE,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
