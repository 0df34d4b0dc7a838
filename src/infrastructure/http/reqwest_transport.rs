//! Reqwest-backed HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::{debug, warn};

use crate::domain::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransportPort, TransportError};

const USER_AGENT: &str = concat!("aquarhone/", env!("CARGO_PKG_VERSION"));

/// Sends gateway requests over the network.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates transport, optionally bounding every request by `timeout`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn classify(error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError("request timed out".to_string())
    } else if error.is_connect() {
        TransportError("failed to connect to booking API".to_string())
    } else {
        TransportError(error.to_string())
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, url = %request.url, "Failed to reach booking API");
            classify(&e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, status, "Failed to read response body");
            classify(&e)
        })?;

        debug!(status, bytes = body.len(), "Received API response");

        Ok(HttpResponse { status, body })
    }
}
