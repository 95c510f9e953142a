// http/executor.rs

use crate::http::ResponseBuffer;
use crate::model::{CallResult, RequestError};
use crate::parser::{api_error, extract_update};
use crate::utils::mask_token;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Form-encoded payload. Only sent with `Post`.
    pub body: Option<String>,
}

/// Moves one request over the wire, streaming the reply into `sink`.
/// Returns the final HTTP status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: &ApiRequest, sink: &mut ResponseBuffer) -> Result<u16, RequestError>;
}

pub struct ReqwestTransport {
    client: Client,
}

/// Builder shared by `ReqwestTransport::new` and the tests.
pub(crate) fn client_builder(timeout: Option<Duration>) -> ClientBuilder {
    let builder = Client::builder().redirect(Policy::limited(MAX_REDIRECTS));
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

impl ReqwestTransport {
    /// `timeout: None` leaves the wait unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, RequestError> {
        let client = client_builder(timeout).build().map_err(|e| RequestError::Init(e.without_url()))?;
        Ok(Self { client })
    }

    #[cfg(test)]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(&self, request: &ApiRequest, sink: &mut ResponseBuffer) -> Result<u16, RequestError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self
                .client
                .post(&request.url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.body.clone().unwrap_or_default()),
        };

        let mut response = builder
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.without_url()))?;
        let status = response.status().as_u16();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| RequestError::Transport(e.without_url()))?
        {
            sink.append(&chunk)?;
        }
        Ok(status)
    }
}

/// Runs single Bot API calls: one request, one buffer, one parse.
pub struct RequestExecutor<T = ReqwestTransport> {
    transport: T,
    max_body_bytes: Option<usize>,
}

impl<T: Transport> RequestExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_body_bytes: None,
        }
    }

    pub fn with_max_body_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_body_bytes = limit;
        self
    }

    pub async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<CallResult, RequestError> {
        let masked_url = mask_token(url);
        let request = ApiRequest {
            method,
            url: url.to_string(),
            body: match method {
                HttpMethod::Get => None,
                HttpMethod::Post => body,
            },
        };
        let mut buffer = match self.max_body_bytes {
            Some(limit) => ResponseBuffer::with_limit(limit),
            None => ResponseBuffer::new(),
        };

        debug!("➡️ {:?} {}", method, masked_url);
        let status = match self.transport.perform(&request, &mut buffer).await {
            Ok(status) => status,
            Err(e) => {
                error!("❌ Request failed [{}]: {}", masked_url, e);
                return Err(e);
            }
        };
        if !(200..300).contains(&status) {
            warn!("⚠️ {} answered with HTTP {}", masked_url, status);
        }

        let document: Value = match serde_json::from_slice(buffer.as_bytes()) {
            Ok(doc) => doc,
            Err(e) if buffer.is_empty() => {
                error!("❌ Empty response body from {}: {}", masked_url, e);
                return Err(e.into());
            }
            Err(e) => {
                error!("❌ Cannot parse JSON from {} ({} bytes): {}", masked_url, buffer.len(), e);
                return Err(e.into());
            }
        };
        let received = buffer.finish();

        if let Some(description) = api_error(&document) {
            warn!("⚠️ Telegram API error from {}: {}", masked_url, description);
        }
        let result = extract_update(&document);
        info!(
            "✅ {} [{}] {} bytes, update_id={}",
            masked_url, status, received, result.update_id
        );
        Ok(result)
    }
}
