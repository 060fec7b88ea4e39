pub use config::*;
pub use server::*;

/// Entry point for starting a server.
mod server;
/// Config for a server.
mod config;
/// Connection for reading the request from a client and writing back the response.
mod connection;
