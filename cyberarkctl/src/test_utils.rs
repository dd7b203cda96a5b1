//! Test utilities for client testing
//!
//! Provides a mock CyberArk-like server that records every request it sees.

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Mock server state
#[derive(Debug, Clone, Default)]
pub struct MockServerState {
    /// Requests in arrival order
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServerState {
    fn record(&self, method: Method, uri: Uri, headers: &HeaderMap, body: Bytes) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            authorization: header_str(headers, header::AUTHORIZATION),
            content_type: header_str(headers, header::CONTENT_TYPE),
            body: body.to_vec(),
        });
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Mock server implementation
#[derive(Debug, Default)]
pub struct MockServer {
    state: MockServerState,
    port: u16,
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the mock server and return it with its base address
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        self.port = listener.local_addr()?.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        Ok((self, server_url))
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().unwrap().last().cloned()
    }

    fn create_router(&self) -> Router {
        Router::new()
            .route("/api/accounts", get(accounts_handler))
            .route("/api/missing", get(not_found_handler).delete(not_found_handler))
            .route("/api/empty", get(no_content_handler).delete(no_content_handler))
            .route("/api/echo", post(echo_handler).put(echo_handler))
            .route("/api/boom", post(server_error_handler))
            .route("/api/slow", get(slow_handler))
            .with_state(self.state.clone())
    }
}

// Handler functions

async fn accounts_handler(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<serde_json::Value> {
    state.record(method, uri, &headers, body);
    Json(serde_json::json!({
        "value": [
            {"id": "12_3", "name": "svc-backup", "safeName": "Prod"},
            {"id": "12_4", "name": "svc-deploy", "safeName": "Dev"}
        ],
        "count": 2
    }))
}

async fn not_found_handler(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.record(method, uri, &headers, body);
    (StatusCode::NOT_FOUND, "not found")
}

async fn no_content_handler(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    state.record(method, uri, &headers, body);
    StatusCode::NO_CONTENT
}

async fn echo_handler(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.record(method, uri, &headers, body.clone());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

async fn server_error_handler(
    State(state): State<MockServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.record(method, uri, &headers, body);
    (StatusCode::INTERNAL_SERVER_ERROR, "internal failure")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}

/// Start a raw server that answers every request with a 404 whose body is cut
/// short: it promises 100 bytes, sends a few, then closes the connection.
pub async fn start_truncated_body_server() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let server_url = format!("http://{}", listener.local_addr()?);

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                if let Err(e) = send_truncated_404(stream).await {
                    eprintln!("Truncated server error: {}", e);
                }
            });
        }
    });

    Ok(server_url)
}

async fn send_truncated_404(mut stream: TcpStream) -> std::io::Result<()> {
    // Consume the request head so closing does not reset the connection.
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }

    stream
        .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 100\r\n\r\nnot f")
        .await?;
    stream.flush().await?;
    stream.shutdown().await
}
