use std::io::{Error, ErrorKind};

use clap::Parser;
use log::info;

use scratch_http::args::Args;
use scratch_http::common::message::Message;
use scratch_http::common::status;
use scratch_http::server::Server;
use scratch_http::setup::{init_logging, shutdown_on_signal};

fn main() -> Result<(), Error> {
    let args = Args::parse();

    init_logging(args.log_level).map_err(|err| Error::new(ErrorKind::Other, err))?;

    let config = args.into_config(|request| {
        info!("{}", String::from_utf8_lossy(&request.serialize()));
        Message::response(status::OK.into())
    });

    let server = Server::bind(config)?;
    shutdown_on_signal(server.handle()?).map_err(|err| Error::new(ErrorKind::Other, err))?;

    server.run()
}
