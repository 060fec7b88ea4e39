pub mod client;
pub mod test_server;
