use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

const CLIENT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends the raw bytes, closes the write half, and reads until the server closes the connection.
pub fn send(addr: SocketAddr, raw: &[u8]) -> String {
    send_and_read(addr, raw, true)
}

/// Sends the raw bytes but keeps the write half open, then reads until the server closes the connection.
pub fn send_without_closing(addr: SocketAddr, raw: &[u8]) -> String {
    send_and_read(addr, raw, false)
}

fn send_and_read(addr: SocketAddr, raw: &[u8], close_write: bool) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(CLIENT_READ_TIMEOUT)).unwrap();

    stream.write_all(raw).unwrap();
    stream.flush().unwrap();
    if close_write {
        stream.shutdown(Shutdown::Write).unwrap();
    }

    let mut response = vec![];
    stream.read_to_end(&mut response).unwrap();
    String::from_utf8(response).unwrap()
}
