//! one-shot HTTP server for exercising the feed client without network access.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const FEED_PATH: &str = "/service/publicJSONFeed";

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl TestServer {
    /// waits for the served exchange to finish and returns the raw request head
    pub fn received_request(self) -> String {
        self.handle
            .join()
            .unwrap_or_else(|_| panic!("test server thread panicked"))
    }
}

/// answers exactly one request with the given status line (e.g. "200 OK")
/// and JSON body.
pub fn serve_once(status: &str, body: &str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("test server address");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept test connection");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read test request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write test response");
        stream.flush().expect("flush test response");
        String::from_utf8_lossy(&request).into_owned()
    });
    TestServer {
        base_url: format!("http://{addr}{FEED_PATH}"),
        handle,
    }
}

/// a feed URL on a local port that nothing listens on
pub fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind unused port");
    let addr = listener.local_addr().expect("unused port address");
    drop(listener);
    format!("http://{addr}{FEED_PATH}")
}
