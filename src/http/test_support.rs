// Test doubles for the HTTP layer: a scripted transport and a tiny TCP responder.

use crate::http::ResponseBuffer;
use crate::http::Transport;
use crate::http::executor::ApiRequest;
use crate::model::RequestError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub struct MockTransport {
    status: u16,
    chunks: Vec<Vec<u8>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::chunked(status, &[body])
    }

    pub fn chunked(status: u16, chunks: &[&str]) -> Self {
        Self {
            status,
            chunks: chunks.iter().map(|c| c.as_bytes().to_vec()).collect(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to every request this transport has seen.
    pub fn requests(&self) -> Arc<Mutex<Vec<ApiRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, request: &ApiRequest, sink: &mut ResponseBuffer) -> Result<u16, RequestError> {
        self.requests.lock().unwrap().push(request.clone());
        for chunk in &self.chunks {
            sink.append(chunk)?;
        }
        Ok(self.status)
    }
}

pub fn json_response(status: u16, body: &str) -> String {
    format!(
        "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

pub fn chunked_response(parts: &[&str]) -> String {
    let mut out = String::from(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n",
    );
    for part in parts {
        out.push_str(&format!("{:x}\r\n{}\r\n", part.len(), part));
    }
    out.push_str("0\r\n\r\n");
    out
}

/// Answers one connection per scripted response, in order, and records the raw requests.
pub struct TestServer {
    base: String,
    handle: JoinHandle<Vec<String>>,
}

impl TestServer {
    pub async fn start(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let mut seen = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                seen.push(read_request(&mut stream).await);
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.ok();
            }
            seen
        });
        Self { base, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn finish(self) -> Vec<String> {
        self.handle.await.unwrap()
    }
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..end]).to_string();
            let body_len = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}
