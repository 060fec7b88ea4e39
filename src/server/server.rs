use std::io::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};

use crate::common::message::Message;
use crate::common::status;
use crate::parse::ParsingError;
use crate::server::config::{Config, Handler};
use crate::server::connection::Connection;
use crate::server::connection::ReadRequestResult::{Closed, Error, Ready};
use crate::util::stream::Stream;
use crate::util::thread_pool::ThreadPool;

/// A bound HTTP server that has not started accepting connections yet.
pub struct Server {
    listener: TcpListener,
    config: Arc<Config>,
    shutdown: Arc<AtomicBool>,
}

/// Stops a running server from another thread.
#[derive(Clone)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Binds the listener to the configured address.
    pub fn bind(config: Config) -> std::io::Result<Server> {
        let listener = TcpListener::bind(&config.addr)?;
        Ok(Server { listener, config: Arc::new(config), shutdown: Arc::new(AtomicBool::new(false)) })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Gets a handle that can shut this server down.
    pub fn handle(&self) -> std::io::Result<ServerHandle> {
        Ok(ServerHandle { addr: wake_addr(self.local_addr()?), shutdown: Arc::clone(&self.shutdown) })
    }

    /// Accepts connections until shut down, handing each one to the thread pool.
    /// Returns after every in-flight connection has been answered.
    pub fn run(self) -> std::io::Result<()> {
        let thread_pool = ThreadPool::new(self.config.connection_handler_threads);
        info!("listening on {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            if self.shutdown.load(Ordering::SeqCst) {
                break;
            }

            let stream = match stream {
                Ok(stream) => stream,
                Err(err) => {
                    warn!("error accepting connection: {}", err);
                    continue;
                }
            };

            let addr = match stream.peer_addr() {
                Ok(addr) => addr,
                Err(err) => {
                    warn!("error getting peer address: {}", err);
                    continue;
                }
            };

            debug!("{}: accepted", addr);
            let config = Arc::clone(&self.config);
            thread_pool.execute(move || handle_tcp_connection(config, stream, addr));
        }

        info!("shutting down, waiting for open connections");
        drop(thread_pool);
        Ok(())
    }
}

impl ServerHandle {
    /// Tells the server to stop accepting connections, and wakes the accept loop so it notices.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Err(err) = TcpStream::connect(self.addr) {
            error!("could not wake listener at {}: {}", self.addr, err);
        }
    }
}

/// Gets an address that connects to a listener bound to the given address.
fn wake_addr(bound: SocketAddr) -> SocketAddr {
    match bound.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), bound.port()),
        IpAddr::V6(ip) if ip.is_unspecified() => SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), bound.port()),
        _ => bound
    }
}

/// Serves the one request on the given socket. The socket is closed when this returns.
fn handle_tcp_connection(config: Arc<Config>, stream: TcpStream, addr: SocketAddr) {
    if let Err(err) = stream.set_read_timeout(config.read_timeout) {
        warn!("{}: could not set read timeout: {}", addr, err);
    }

    let mut connection = Connection::new(addr, stream, config.limits);

    if let Err(err) = respond_to_request(&mut connection, &config.handler) {
        warn!("{}: error writing response: {}", addr, err);
    }
}

/// Reads one request from the connection and writes one response to it.
fn respond_to_request<S: Stream>(connection: &mut Connection<S>, handler: &Handler) -> std::io::Result<()> {
    match connection.read_request() {
        Ready(request) => {
            debug!("{}: {}, {} headers, {} byte body", connection.addr, request.start, request.headers.len(), request.body.len());
            let response = handler(&request);
            response.write_to(connection)
        }
        Closed => {
            debug!("{}: closed before sending a request", connection.addr);
            Ok(())
        }
        Error(error) => {
            warn!("{}: {}", connection.addr, error);
            write_error_response(connection, &error)
        }
    }
}

/// Writes a response to the given request parsing error.
fn write_error_response(writer: &mut impl Write, error: &ParsingError) -> std::io::Result<()> {
    if let ParsingError::Io(_) = error {
        return Ok(());
    }
    Message::response(status::BAD_REQUEST.into()).write_to(writer)
}
