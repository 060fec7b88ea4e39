use std::time::Duration;

use crate::common::message::Message;
use crate::parse::Limits;

/// Produces the response for a parsed request. Called once per connection, on a pool thread.
pub type Handler = Box<dyn Fn(&Message) -> Message + 'static + Send + Sync>;

/// Default time a connection may sit idle mid-request before it is dropped.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of connection handler threads.
pub const DEFAULT_CONNECTION_HANDLER_THREADS: usize = 5;

/// The config for an HTTP server.
pub struct Config {
    /// The address to bind the server listener to.
    pub addr: String,
    /// The number of threads to spawn for handling connections. Each thread is used for one
    /// connection at a time.
    pub connection_handler_threads: usize,
    /// Read timeout set on every accepted socket. None blocks forever.
    pub read_timeout: Option<Duration>,
    /// Size limits for parsing requests.
    pub limits: Limits,
    /// The handler called with each request.
    pub handler: Handler,
}

impl Config {
    /// Creates a config with default threads, timeout and limits.
    pub fn new(addr: impl Into<String>, handler: impl Fn(&Message) -> Message + 'static + Send + Sync) -> Config {
        Config {
            addr: addr.into(),
            connection_handler_threads: DEFAULT_CONNECTION_HANDLER_THREADS,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            limits: Limits::default(),
            handler: Box::new(handler),
        }
    }
}
