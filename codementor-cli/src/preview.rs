//! `preview` subcommand: a tiny local HTTP server for the rendered page.
//!
//! The page is rendered once up front; every request is answered from that
//! immutable copy. One blocking accept loop, `Connection: close` on every
//! response.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::process::Command;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Result, SiteError};

/// Cap on header lines drained per request.
const MAX_HEADER_LINES: usize = 100;

/// Idle time after which a connection is dropped; the accept loop is serial.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Pre-rendered bodies served by the preview server.
#[derive(Clone, Debug)]
pub struct PreviewPage {
    html: Arc<str>,
    manifest: Arc<str>,
}

impl PreviewPage {
    pub fn new(html: impl Into<Arc<str>>, manifest: impl Into<Arc<str>>) -> Self {
        Self {
            html: html.into(),
            manifest: manifest.into(),
        }
    }
}

/// A fully decided HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Arc<str>,
    /// `false` for HEAD: headers only, `Content-Length` still set
    pub include_body: bool,
}

impl Response {
    fn text(status: &'static str, body: &str, include_body: bool) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: Arc::from(body),
            include_body,
        }
    }
}

/// Decide the response for one request line (`GET /path HTTP/1.1`).
pub fn route(request_line: &str, page: &PreviewPage) -> Response {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("head");

    if !(method.eq_ignore_ascii_case("get") || is_head) {
        return Response::text("HTTP/1.1 405 Method Not Allowed", "method not allowed", true);
    }

    let (path_only, _) = target.split_once('?').unwrap_or((target, ""));
    match path_only {
        "/" | "/index.html" => Response {
            status: "HTTP/1.1 200 OK",
            content_type: "text/html; charset=utf-8",
            body: Arc::clone(&page.html),
            include_body: !is_head,
        },
        "/manifest.json" => Response {
            status: "HTTP/1.1 200 OK",
            content_type: "application/json; charset=utf-8",
            body: Arc::clone(&page.manifest),
            include_body: !is_head,
        },
        // No icon asset ships with the page; answer without a body so
        // browsers stop asking.
        "/favicon.ico" => Response {
            status: "HTTP/1.1 204 No Content",
            content_type: "image/x-icon",
            body: Arc::from(""),
            include_body: false,
        },
        _ => Response::text("HTTP/1.1 404 Not Found", "not found", !is_head),
    }
}

fn write_response<W: Write>(stream: &mut W, response: &Response) -> io::Result<()> {
    let header = format!(
        "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.content_type,
        response.body.len()
    );
    stream.write_all(header.as_bytes())?;
    if response.include_body {
        stream.write_all(response.body.as_bytes())?;
    }
    stream.flush()
}

/// Bind the preview listener. Port 0 picks an ephemeral port.
pub fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let addr = format!("{host}:{port}");
    TcpListener::bind(&addr).map_err(|source| SiteError::Bind { addr, source })
}

/// Base URL of a bound listener.
pub fn base_url(listener: &TcpListener) -> Result<String> {
    let local = listener
        .local_addr()
        .map_err(|e| SiteError::io("<preview listener>", e))?;
    Ok(format!("http://{local}"))
}

/// Accept connections until the process is stopped.
pub fn serve(listener: TcpListener, page: PreviewPage) {
    serve_with_timeout(listener, page, READ_TIMEOUT);
}

fn serve_with_timeout(listener: TcpListener, page: PreviewPage, read_timeout: Duration) {
    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(e) = handle_connection(&mut stream, &page, read_timeout) {
                    debug!("connection error: {e}");
                }
            }
            Err(e) => warn!("accept failed: {e}"),
        }
    }
}

fn handle_connection(
    stream: &mut TcpStream,
    page: &PreviewPage,
    read_timeout: Duration,
) -> io::Result<()> {
    stream.set_read_timeout(Some(read_timeout))?;
    let request_line = {
        let mut reader = BufReader::new(&*stream);
        let mut request_line = String::new();
        if reader.read_line(&mut request_line)? == 0 {
            return Ok(());
        }

        // Drain headers so closing the socket doesn't reset the client.
        let mut header = String::new();
        for _ in 0..MAX_HEADER_LINES {
            header.clear();
            if reader.read_line(&mut header)? == 0 || header.trim().is_empty() {
                break;
            }
        }
        request_line
    };

    let request_line = request_line.trim();
    let response = route(request_line, page);
    debug!("{request_line} -> {}", response.status);
    write_response(stream, &response)
}

/// Best-effort launch of the system browser.
pub fn open_in_browser(url: &str) {
    if url.bytes().any(|b| b < 0x20) {
        warn!("skipping auto-open for suspicious url: {url}");
        return;
    }

    #[cfg(target_os = "macos")]
    let try_cmds = vec![("open", vec![url])];
    #[cfg(target_os = "windows")]
    let try_cmds = vec![("cmd", vec!["/C", "start", "", url])];
    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let try_cmds = vec![("xdg-open", vec![url])];

    for (program, args) in try_cmds {
        if Command::new(program).args(args).spawn().is_ok() {
            info!("opened {url} in browser");
            return;
        }
    }
    warn!("could not open browser automatically: {url}");
}
