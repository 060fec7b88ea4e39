use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::{JoinHandle, spawn};

use scratch_http::common::message::Message;
use scratch_http::server::{Config, Server, ServerHandle};

/// A server running on its own thread, bound to a free local port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: ServerHandle,
    thread: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Binds before returning, so connections made right away queue up instead of being refused.
    pub fn start(config: Config) -> TestServer {
        let server = Server::bind(config).unwrap();
        let addr = server.local_addr().unwrap();
        let handle = server.handle().unwrap();
        let thread = spawn(move || server.run());
        TestServer { addr, handle, thread }
    }

    /// A handle for shutting the server down from elsewhere.
    pub fn handle(&self) -> ServerHandle {
        self.handle.clone()
    }

    /// Shuts the server down and waits for the accept loop to return.
    pub fn stop(self) {
        self.handle.shutdown();
        self.wait();
    }

    /// Waits for the accept loop to return after something else shut it down.
    pub fn wait(self) {
        self.thread.join().unwrap().unwrap();
    }
}

/// Config on a free local port with a handler that records every request and answers with the given response.
pub fn recording_config(response: Message) -> (Config, Arc<Mutex<Vec<Message>>>) {
    let requests = Arc::new(Mutex::new(vec![]));
    let requests_clone = Arc::clone(&requests);

    let config = Config::new("127.0.0.1:0", move |request: &Message| {
        requests_clone.lock().unwrap().push(request.clone());
        response.clone()
    });

    (config, requests)
}
