use std::io::BufRead;

use crate::common::message::RequestLine;
use crate::common::method::Method;
use crate::common::version;
use crate::parse::error::ParsingError;
use crate::parse::line::{LineRead, read_line};
use crate::parse::parse::{Parse, ParseResult};

/// The parser for the first line of a request.
pub struct RequestLineParser {
    max_line_size: usize,
}

impl RequestLineParser {
    /// Creates a new parser for a request's first line.
    pub fn new(max_line_size: usize) -> RequestLineParser {
        RequestLineParser { max_line_size }
    }
}

impl Parse<RequestLine> for RequestLineParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<RequestLine> {
        match read_line(reader, self.max_line_size)? {
            LineRead::Line(line) => parse_request_line(line.trim()),
            LineRead::Eof(partial) => Err(ParsingError::MalformedRequestLine(partial))
        }
    }
}

/// Parses the given trimmed string as the first line of a request: `<METHOD> <PATH> <VERSION>`.
/// Tokens after the version are ignored. The version is checked but not kept; the returned line is
/// always HTTP/1.1.
pub fn parse_request_line(line: &str) -> ParseResult<RequestLine> {
    let malformed = || ParsingError::MalformedRequestLine(line.to_string());
    let mut split = line.split(' ');

    let method_raw = split.next().ok_or_else(malformed)?;
    let path = split.next().ok_or_else(malformed)?;
    let http_version = split.next().ok_or_else(malformed)?;

    let method = Method::try_from_str(method_raw)?;

    if !version::is_supported(http_version) {
        return Err(ParsingError::UnsupportedVersion(http_version.to_string()));
    }

    Ok(RequestLine::new(method, path.trim()))
}

#[cfg(test)]
mod tests {
    use crate::common::message::RequestLine;
    use crate::common::method::{InvalidMethod, Method};
    use crate::parse::error::ParsingError;
    use crate::parse::request_line::{parse_request_line, RequestLineParser};
    use crate::parse::test_util;
    use crate::parse::test_util::TestParseResult;
    use crate::parse::test_util::TestParseResult::{ParseErr, Value};

    fn test_with_eof(data: Vec<&str>, expected: TestParseResult<RequestLine>) {
        test_util::test_with_eof(RequestLineParser::new(512), data, expected);
    }

    #[test]
    fn simple() {
        test_with_eof(vec!["GET / HTTP/1.1\r\n"], Value(RequestLine::new(Method::GET, "/")));
    }

    #[test]
    fn fragmented() {
        test_with_eof(vec!["PA", "TCH /a", "/b HTTP", "/1.1\r", "\n"], Value(RequestLine::new(Method::PATCH, "/a/b")));
    }

    #[test]
    fn bare_lf() {
        test_with_eof(vec!["DELETE /x HTTP/1.1\n"], Value(RequestLine::new(Method::DELETE, "/x")));
    }

    #[test]
    fn weird_path_kept_verbatim() {
        assert_eq!(
            RequestLine::new(Method::GET, "!#%$#/-+=_$+[]{}\\%&$?q=1#frag"),
            parse_request_line("GET !#%$#/-+=_$+[]{}\\%&$?q=1#frag HTTP/1.1").unwrap());
    }

    #[test]
    fn extra_tokens_ignored() {
        assert_eq!(
            RequestLine::new(Method::OPTIONS, "*"),
            parse_request_line("OPTIONS * HTTP/1.1 hello there blah blah").unwrap());
    }

    #[test]
    fn http_1_0_stamped_as_1_1() {
        let line = parse_request_line("GET / HTTP/1.0").unwrap();
        assert_eq!("HTTP/1.1", line.version);
    }

    #[test]
    fn unsupported_version() {
        assert!(matches!(parse_request_line("GET / HTTP/2.0"), Err(ParsingError::UnsupportedVersion(v)) if v == "HTTP/2.0"));
    }

    #[test]
    fn invalid_method() {
        test_with_eof(vec!["yadadada / HTTP/1.1\r\n"], ParseErr(ParsingError::InvalidMethod(InvalidMethod("yadadada".into()))));
    }

    #[test]
    fn lowercase_method() {
        test_with_eof(vec!["get / HTTP/1.1\r\n"], ParseErr(ParsingError::InvalidMethod(InvalidMethod("get".into()))));
    }

    #[test]
    fn missing_path_and_version() {
        test_with_eof(vec!["GET\r\n"], ParseErr(ParsingError::MalformedRequestLine("GET".into())));
    }

    #[test]
    fn missing_version() {
        test_with_eof(vec!["GET /\r\n"], ParseErr(ParsingError::MalformedRequestLine("GET /".into())));
    }

    #[test]
    fn empty_line() {
        test_with_eof(vec!["\r\n"], ParseErr(ParsingError::MalformedRequestLine("".into())));
    }

    #[test]
    fn eof_before_newline() {
        test_with_eof(vec!["GET / HTTP/1.1"], ParseErr(ParsingError::MalformedRequestLine("GET / HTTP/1.1".into())));
    }

    #[test]
    fn no_data() {
        test_with_eof(vec![], ParseErr(ParsingError::MalformedRequestLine("".into())));
    }

    #[test]
    fn eof_before_newline_at_line_limit() {
        test_util::test_with_eof(
            RequestLineParser::new(14),
            vec!["GET / HTTP/1.1"],
            ParseErr(ParsingError::MalformedRequestLine("GET / HTTP/1.1".into())));
    }

    #[test]
    fn too_long() {
        let path = "a".repeat(600);
        test_with_eof(vec!["GET /", path.as_str(), " HTTP/1.1\r\n"], ParseErr(ParsingError::LineTooLong { limit: 512 }));
    }
}
