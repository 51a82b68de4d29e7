use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Canned response for one request line, e.g. `GET /models`.
#[derive(Clone)]
pub struct Route {
    pub status: &'static str,
    pub body: String,
}

impl Route {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
        }
    }

    pub fn status(status: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Multi-request HTTP server keyed by method and path (query included).
pub struct HttpStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl HttpStub {
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let routes: HashMap<String, Route> = routes
            .into_iter()
            .map(|(key, route)| (key.to_string(), route))
            .collect();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else {
                    break;
                };
                let routes = routes.clone();
                let seen = Arc::clone(&seen);
                thread::spawn(move || handle(stream, &routes, &seen));
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Request targets seen so far, as `METHOD /path`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, seen: &Mutex<Vec<String>>) {
    let Some(key) = read_request(&mut stream) else {
        return;
    };
    seen.lock().unwrap().push(key.clone());
    let route = routes
        .get(&key)
        .cloned()
        .unwrap_or_else(|| Route::status("404 Not Found", r#"{"detail":"Not Found"}"#));
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

// Returns `METHOD /target` after draining the body.
fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let head_end = loop {
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(read) => raw.extend_from_slice(&buf[..read]),
        }
    };
    let head = String::from_utf8_lossy(&raw[..head_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let mut body_len = raw.len().saturating_sub(head_end + 4);
    while body_len < content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(read) => body_len += read,
        }
    }
    let mut parts = head.lines().next()?.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    Some(format!("{method} {target}"))
}
