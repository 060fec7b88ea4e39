use std::time::Duration;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::LevelFilter;

use crate::common::message::Message;
use crate::parse::Limits;
use crate::server::Config;

const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// A from-scratch HTTP/1.1 server. Logs each request it receives and answers it with 200 OK.
#[derive(Parser, Debug)]
#[command(author = AUTHORS, version, about)]
pub struct Args {
    /// (Optional) Host name or IP address to serve from. Empty listens on all interfaces.
    #[arg(long, default_value_t = String::new())]
    pub host: String,
    /// (Optional) Port number to open on host.
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
    /// (Optional) Number of threads handling connections.
    #[arg(short, long, default_value_t = 5, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub threads: usize,
    /// (Optional) Seconds a connection may stall mid-request before it is dropped. 0 waits forever.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub read_timeout: u64,
    /// (Optional) Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    /// The address to bind to.
    pub fn addr(&self) -> String {
        let host = if self.host.is_empty() { "0.0.0.0" } else { &self.host };
        format!("{}:{}", host, self.port)
    }

    /// Builds the server config from these arguments and the given handler.
    pub fn into_config(self, handler: impl Fn(&Message) -> Message + 'static + Send + Sync) -> Config {
        Config {
            addr: self.addr(),
            connection_handler_threads: self.threads,
            read_timeout: match self.read_timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs))
            },
            limits: Limits::default(),
            handler: Box::new(handler),
        }
    }
}
