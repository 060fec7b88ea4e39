use std::fmt::Debug;
use std::io::{BufReader, Read};

use crate::parse::error::ParsingError;
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::test_util::TestParseResult::{ParseErr, Value};
use crate::util::mock::MockReader;

#[derive(Debug)]
pub enum TestParseResult<T> {
    Value(T),
    ParseErr(ParsingError),
}

impl<T> From<ParsingError> for TestParseResult<T> {
    fn from(err: ParsingError) -> Self {
        ParseErr(err)
    }
}

/// Parses the given chunks, followed by EOF, and checks the result.
pub fn test_with_eof<T: Debug + Eq>(parser: impl Parse<T>, data: Vec<&str>, expected: TestParseResult<T>) {
    let reader = MockReader::from_strs(data);
    test_reader(parser, reader, expected);
}

/// Like test_with_eof, but with raw byte chunks.
pub fn test_bytes<T: Debug + Eq>(parser: impl Parse<T>, data: Vec<&[u8]>, expected: TestParseResult<T>) {
    let reader = MockReader::from_bytes(data);
    test_reader(parser, reader, expected);
}

fn test_reader<T: Debug + Eq>(parser: impl Parse<T>, reader: impl Read, expected: TestParseResult<T>) {
    let mut reader = BufReader::new(reader);
    let actual = to_parse_test_result(parser.parse(&mut reader));
    assert_results_equal(actual, expected);
}

fn to_parse_test_result<T>(result: ParseResult<T>) -> TestParseResult<T> {
    match result {
        Ok(value) => Value(value),
        Err(err) => ParseErr(err)
    }
}

fn assert_results_equal<T: Debug + Eq>(actual: TestParseResult<T>, expected: TestParseResult<T>) {
    match (expected, actual) {
        (Value(exp), Value(act)) => assert_eq!(exp, act),
        (exp, act) => assert_eq!(format!("{:?}", exp), format!("{:?}", act))
    }
}
