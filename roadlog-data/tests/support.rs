//! Loopback HTTP server answering each connection with a canned response.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// A one-shot server: accepts a single request, records its request line and
/// replies with `status` and `body`.
pub struct CannedServer {
    /// Base URL of the server, without a trailing slash.
    pub base_url: String,
    request_line: Receiver<String>,
}

impl CannedServer {
    /// Starts the server on an ephemeral loopback port.
    pub fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut first = String::new();
            reader.read_line(&mut first).expect("read request line");
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).expect("read header");
                if read == 0 || line == "\r\n" {
                    break;
                }
            }
            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");
            stream.flush().expect("flush");
            tx.send(first.trim_end().to_owned()).expect("send request line");
        });
        Self {
            base_url: format!("http://{addr}"),
            request_line: rx,
        }
    }

    /// The request line the server received, e.g. `GET /search?... HTTP/1.1`.
    pub fn request_line(&self) -> String {
        self.request_line.recv().expect("server saw a request")
    }
}
