/// HTTP header data types and functions.
pub mod header;
/// HTTP message data types and serialization.
pub mod message;
/// HTTP method data type and functions.
pub mod method;
/// HTTP status data type and functions.
pub mod status;
/// HTTP version constants and functions.
pub mod version;
