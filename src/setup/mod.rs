use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::server::ServerHandle;

/// Exit code used when a second signal forces the process down.
const FORCED_EXIT_CODE: i32 = 130;

/// Initialises the global terminal logger at the given level.
/// Fails if a logger has already been set.
pub fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Debug)
        .build();

    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

/// Shuts the server down gracefully on the first SIGINT or SIGTERM.
/// A second signal exits the process immediately without waiting for open connections.
/// Can only be installed once per process.
pub fn shutdown_on_signal(handle: ServerHandle) -> Result<(), ctrlc::Error> {
    let signalled = AtomicBool::new(false);

    ctrlc::set_handler(move || {
        if signalled.swap(true, Ordering::SeqCst) {
            warn!("second shutdown signal, exiting now");
            process::exit(FORCED_EXIT_CODE);
        }

        info!("shutdown signal received, draining connections");
        handle.shutdown();
    })
}
