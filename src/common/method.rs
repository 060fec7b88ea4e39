use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Error for a method token that is not in the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid method string '{0}'")]
pub struct InvalidMethod(pub String);

macro_rules! methods {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $token:expr);
        )+
    ) => {
        /// An HTTP method.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum Method {
            $(
            $(#[$docs])*
            $name,
            )+
        }

        impl Method {
            /// Every recognized method, in table order.
            pub const ALL: &'static [Method] = &[$(Method::$name,)+];

            /// Gets the canonical uppercase token for this method.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                    Method::$name => $token,
                    )+
                }
            }

            /// Converts the given string to a method. Methods are case sensitive, so only the exact
            /// uppercase token matches.
            pub fn try_from_str(s: &str) -> Result<Method, InvalidMethod> {
                match s {
                    $(
                    $token => Ok(Method::$name),
                    )+
                    _ => Err(InvalidMethod(s.to_string()))
                }
            }
        }
    }
}

methods! {
    /// GET method.
    (GET, "GET");
    /// POST method.
    (POST, "POST");
    /// PUT method.
    (PUT, "PUT");
    /// PATCH method.
    (PATCH, "PATCH");
    /// DELETE method.
    (DELETE, "DELETE");
    /// CONNECT method.
    (CONNECT, "CONNECT");
    /// OPTIONS method.
    (OPTIONS, "OPTIONS");
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::try_from_str(s)
    }
}

impl TryFrom<&str> for Method {
    type Error = InvalidMethod;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Method::try_from_str(value)
    }
}
