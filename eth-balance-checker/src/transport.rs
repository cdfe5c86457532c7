use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use tracing::debug;

use crate::error::TransportError;

/// Everything needed to deliver one request over HTTP
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Destination endpoint
    pub url: String,

    /// HTTP method
    pub method: Method,

    /// Request headers
    pub headers: HeaderMap,

    /// UTF-8 request body
    pub body: String,
}

/// Raw reply from the endpoint; the body is uninterpreted
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// The network exchange, abstracted so the pipeline can run against canned replies
///
/// Implementations report any failure to obtain a complete body as a
/// [`TransportError`]; they never hand back partial bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport, optionally bounding each exchange with `timeout`
    ///
    /// # Arguments
    ///
    /// * `timeout` - Upper bound for connect plus response, or `None` for no limit
    ///
    /// # Returns
    ///
    /// * `Result<Self, TransportError>` - The transport, or an error if the
    ///   underlying client (e.g. its TLS backend) could not be initialised
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError> {
        debug!("Sending {} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!("Received {} with {} byte body", status, body.len());

        Ok(TransportResponse { status, body })
    }
}
