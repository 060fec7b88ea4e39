use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::common::header::Header::{Custom, Standard};

/// A header name. Is either a "Standard" header with a static string, or a "Custom" header with a uniquely allocated String.
/// The "Standard" variant is to reuse memory for frequently seen headers.
/// Header names are always lowercase.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Header {
    Standard(&'static str),
    Custom(String),
}

impl Header {
    pub fn as_str(&self) -> &str {
        match self {
            Standard(str) => str,
            Custom(str) => str.as_str()
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! standard_headers {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $value:expr);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: Header = Header::Standard($value);
        )+

        impl From<String> for Header {
            /// Gets a header from the given string representing the header name.
            fn from(mut value: String) -> Header {
                value.make_ascii_lowercase();
                match value.as_str() {
                    $(
                    $value => $name,
                    )+
                    _ => Header::Custom(value)
                }
            }
        }
    }
}

impl From<&str> for Header {
    /// Gets a header from the given string representing the header name.
    fn from(value: &str) -> Header {
        Header::from(value.to_string())
    }
}

standard_headers! {
    (ACCEPT, "accept");
    (ACCEPT_ENCODING, "accept-encoding");
    (ACCEPT_LANGUAGE, "accept-language");
    (AUTHORIZATION, "authorization");
    (CACHE_CONTROL, "cache-control");
    (CONNECTION, "connection");
    (CONTENT_ENCODING, "content-encoding");
    (CONTENT_LENGTH, "content-length");
    (CONTENT_TYPE, "content-type");
    (COOKIE, "cookie");
    (DATE, "date");
    (EXPECT, "expect");
    (HOST, "host");
    (IF_MODIFIED_SINCE, "if-modified-since");
    (IF_NONE_MATCH, "if-none-match");
    (LOCATION, "location");
    (ORIGIN, "origin");
    (RANGE, "range");
    (REFERER, "referer");
    (SERVER, "server");
    (SET_COOKIE, "set-cookie");
    (TRANSFER_ENCODING, "transfer-encoding");
    (UPGRADE, "upgrade");
    (USER_AGENT, "user-agent");
}

/// Creates a map of headers. Later pairs overwrite earlier pairs with the same header name.
/// ```
/// use scratch_http::common::header::{CONNECTION, CONTENT_TYPE, CONTENT_LENGTH, Header};
/// use scratch_http::header_map;
///
/// let headers = header_map![
///    (CONNECTION, "keep-alive"),
///    (CONTENT_LENGTH, "5"),
///    ("custom-header", "hello"),
///    ("coNtEnt-TyPE", "something"),
///    ("Connection", "close")
/// ];
///
/// assert_eq!(headers.len(), 4);
/// assert!(headers.contains_header_value(&CONNECTION, "close"));
/// assert!(headers.contains_header_value(&CONTENT_LENGTH, "5"));
/// assert!(headers.contains_header_value(&CONTENT_TYPE, "something"));
/// assert!(headers.contains_header_value(&Header::Custom("custom-header".into()), "hello"));
/// ```
#[macro_export]
macro_rules! header_map {
    () => { $crate::common::header::HeaderMap::new() };
    ($(($header:expr, $value:expr)),+ $(,)?) => {
        $crate::common::header::HeaderMap::from_pairs(vec![
            $(($header.into(), $value.into()),)+
        ])
    }
}

/// A map of header names to a single value each.
///
/// Inserting a header that is already present replaces its value (last write wins) but keeps the
/// position of the first insertion, so iteration yields headers in first-insertion order.
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: IndexMap<Header, String>,
}

impl HeaderMap {
    /// Creates an empty header map.
    pub fn new() -> HeaderMap {
        HeaderMap { entries: IndexMap::new() }
    }

    /// Gets a header map from the given vector of header and value pairs.
    pub fn from_pairs(header_values: Vec<(Header, String)>) -> HeaderMap {
        header_values.into_iter().collect()
    }

    /// Sets the value for the given header. Returns the value that was replaced, if any.
    pub fn insert(&mut self, k: Header, v: String) -> Option<String> {
        self.entries.insert(k, v)
    }

    /// Gets the value for the given header.
    pub fn get(&self, k: &Header) -> Option<&str> {
        self.entries.get(k).map(String::as_str)
    }

    /// Checks if the map contains the given header with the given value.
    pub fn contains_header_value(&self, k: &Header, v: &str) -> bool {
        self.get(k) == Some(v)
    }

    /// Removes the given header, returning its value. Later headers keep their relative order.
    pub fn remove(&mut self, k: &Header) -> Option<String> {
        self.entries.shift_remove(k)
    }

    /// Iterates over the headers in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item=(&Header, &str)> {
        self.entries.iter().map(|(header, value)| (header, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Header, String)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item=(Header, String)>>(iter: I) -> Self {
        iter.into_iter().fold(HeaderMap::new(), |mut m, (header, value)| {
            m.insert(header, value);
            m
        })
    }
}
