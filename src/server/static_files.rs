//! Built-in static file server used when the project has no `package.json`.
//!
//! Serves files below a root directory over plain HTTP/1.1, one connection
//! at a time, closing each connection after the response.

use std::fs;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use super::interrupt::InterruptFlag;

const MAX_HEADER_BYTES: usize = 16 * 1024;
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// A bound static file server.
#[derive(Debug)]
pub struct StaticServer {
    root: PathBuf,
    listener: TcpListener,
}

impl StaticServer {
    /// Bind to `addr` and serve files from `root`.
    ///
    /// `root` must exist; it is canonicalized so symlinks can be confined.
    pub fn bind(root: &Path, addr: SocketAddr) -> io::Result<Self> {
        let root = root.canonicalize()?;
        let listener = TcpListener::bind(addr)?;
        listener.set_nonblocking(true)?;
        Ok(Self { root, listener })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until `interrupt` is raised.
    pub fn serve_until(&self, interrupt: &InterruptFlag) -> io::Result<()> {
        while !interrupt.is_raised() {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    if let Err(e) = self.handle(stream) {
                        tracing::debug!("Connection from {} failed: {}", peer, e);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => thread::sleep(POLL_INTERVAL),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn handle(&self, mut stream: TcpStream) -> io::Result<()> {
        stream.set_nonblocking(false)?;
        stream.set_read_timeout(Some(READ_TIMEOUT))?;

        let header = read_http_header(&mut stream)?;
        let header = String::from_utf8_lossy(&header);
        let request_line = header.split("\r\n").next().unwrap_or("");
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or("");
        let target = parts.next().unwrap_or("");

        let response = self.respond(method, target);
        tracing::debug!("{} {} -> {}", method, target, response.status);
        response.write_to(&mut stream, method == "HEAD")
    }

    /// Build the response for a request line.
    fn respond(&self, method: &str, target: &str) -> Response {
        if method != "GET" && method != "HEAD" {
            return Response::text(405, "Method Not Allowed").with_header("Allow", "GET, HEAD");
        }
        let Some(path) = resolve(&self.root, target) else {
            return Response::text(403, "Forbidden");
        };

        let file = if path.is_dir() {
            path.join("index.html")
        } else {
            path
        };
        let Some(file) = self.confine(file) else {
            return Response::text(403, "Forbidden");
        };

        match fs::read(&file) {
            Ok(body) => Response {
                status: 200,
                content_type: content_type(&file),
                headers: Vec::new(),
                body,
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Response::text(404, "Not Found"),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Response::text(403, "Forbidden")
            }
            Err(e) => {
                tracing::debug!("Reading {} failed: {}", file.display(), e);
                Response::text(500, "Internal Server Error")
            }
        }
    }

    /// Follow symlinks and reject anything that lands outside the root.
    ///
    /// Paths that do not exist are returned as-is and answered with 404.
    fn confine(&self, path: PathBuf) -> Option<PathBuf> {
        match path.canonicalize() {
            Ok(real) if real.starts_with(&self.root) => Some(real),
            Ok(real) => {
                tracing::debug!("{} resolves outside the root", real.display());
                None
            }
            Err(_) => Some(path),
        }
    }
}

struct Response {
    status: u16,
    content_type: &'static str,
    headers: Vec<(&'static str, &'static str)>,
    body: Vec<u8>,
}

impl Response {
    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    fn write_to(&self, stream: &mut TcpStream, head_only: bool) -> io::Result<()> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status,
            reason_phrase(self.status),
            self.content_type,
            self.body.len()
        );
        for (name, value) in &self.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str("\r\n");

        stream.write_all(head.as_bytes())?;
        if !head_only {
            stream.write_all(&self.body)?;
        }
        stream.flush()
    }
}

fn read_http_header(stream: &mut TcpStream) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = stream.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
        if buffer.windows(4).any(|w| w == b"\r\n\r\n") || buffer.len() >= MAX_HEADER_BYTES {
            break;
        }
    }
    Ok(buffer)
}

/// Map a request target to a path below `root`, lexically.
///
/// Returns `None` for targets with `..` or other escaping segments.
/// Symlinks are not followed here; see [`StaticServer::confine`].
fn resolve(root: &Path, target: &str) -> Option<PathBuf> {
    let path = target.split(['?', '#']).next().unwrap_or("");
    let decoded = urlencoding::decode(path).ok()?;

    let mut resolved = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains('\\') || s.contains(':') || s.contains('\0') => return None,
            s => resolved.push(s),
        }
    }
    Some(resolved)
}

/// Guess a `Content-Type` from the file extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "json" | "map" => "application/json",
        "txt" | "md" => "text/plain; charset=utf-8",
        "xml" => "application/xml",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "wasm" => "application/wasm",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Internal Server Error",
    }
}
