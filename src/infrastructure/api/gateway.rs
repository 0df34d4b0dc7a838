//! Request gateway: the single path every API call takes.
//!
//! A call ends in one of three ways: the decoded payload, a rejection carrying
//! the API's `error` field (or a generic message), or a transport failure.
//! Authenticated calls may also stop before the network when no credential is
//! stored. Nothing is retried or cached.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::Credential;
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::{
    CredentialStorePort, HttpMethod, HttpRequest, HttpResponse, HttpTransportPort,
};

const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";
const AUTHORIZATION: &str = "Authorization";

/// A call relative to the API base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches an already serialized body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `payload` as the JSON body.
    ///
    /// # Errors
    /// Returns a transport error if the payload cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> ApiResult<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::transport(format!("failed to encode request body: {e}")))?;
        Ok(self.body(body))
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Uniform transport for every booking API call.
#[derive(Clone)]
pub struct RequestGateway {
    transport: Arc<dyn HttpTransportPort>,
    credentials: Arc<dyn CredentialStorePort>,
    base_url: String,
}

impl RequestGateway {
    /// Creates a gateway rooted at `base_url`.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransportPort>,
        credentials: Arc<dyn CredentialStorePort>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends an anonymous call.
    ///
    /// # Errors
    /// Returns `Rejected` for non-success statuses and `Transport` when no
    /// usable response came back.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let http_request = self.resolve(request);
        let method = http_request.method;
        let url = http_request.url.clone();

        debug!(%method, %url, "Sending API request");

        let response = self.transport.send(http_request).await.map_err(|e| {
            warn!(%method, %url, error = %e, "API request failed in transport");
            ApiError::transport(e.0)
        })?;

        Self::interpret(response).inspect_err(|e| match e {
            ApiError::Rejected { status, message } => {
                debug!(%method, %url, status, %message, "API rejected request");
            }
            ApiError::Transport { reason } => {
                warn!(%method, %url, %reason, "Unusable API response");
            }
            ApiError::MissingCredential => {}
        })
    }

    /// Sends a call carrying the stored credential as a bearer header.
    ///
    /// Short-circuits with `MissingCredential` when nothing is stored.
    ///
    /// # Errors
    /// Same as [`Self::send`], plus `MissingCredential`.
    pub async fn send_authenticated<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApiResult<T> {
        let credential = self.stored_credential().await.ok_or_else(|| {
            debug!(path = %request.path, "No stored credential, skipping request");
            ApiError::MissingCredential
        })?;

        self.send(request.header(AUTHORIZATION, credential.bearer()))
            .await
    }

    async fn stored_credential(&self) -> Option<Credential> {
        match self.credentials.get().await {
            Ok(credential) => credential,
            Err(e) => {
                warn!(error = %e, "Failed to read stored credential");
                None
            }
        }
    }

    fn resolve(&self, request: ApiRequest) -> HttpRequest {
        let ApiRequest {
            method,
            path,
            headers,
            body,
        } = request;

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: merge_headers(headers),
            body,
        }
    }

    fn interpret<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
        let payload = parse_payload(&response.body)?;

        if !response.is_success() {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(ApiError::rejected(response.status, message));
        }

        serde_json::from_value(payload)
            .map_err(|e| ApiError::transport(format!("unexpected response shape: {e}")))
    }
}

/// Default JSON content type first, caller headers override it.
fn merge_headers(caller: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut merged = vec![(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string())];

    for (name, value) in caller {
        merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        merged.push((name, value));
    }

    merged
}

/// An empty body reads as JSON `null`.
fn parse_payload(body: &str) -> ApiResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body)
        .map_err(|e| ApiError::transport(format!("malformed response body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockCredentialStore, MockTransport};
    use serde::Deserialize;

    const BASE_URL: &str = "http://api.test";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        value: u32,
    }

    fn gateway(
        transport: MockTransport,
        store: MockCredentialStore,
    ) -> (RequestGateway, Arc<MockTransport>, Arc<MockCredentialStore>) {
        let transport = Arc::new(transport);
        let store = Arc::new(store);
        let gateway = RequestGateway::new(transport.clone(), store.clone(), BASE_URL);
        (gateway, transport, store)
    }

    #[tokio::test]
    async fn test_success_returns_payload() {
        let (gateway, transport, _) = gateway(
            MockTransport::new().reply(200, r#"{"value": 42}"#),
            MockCredentialStore::new(),
        );

        let echo: Echo = gateway.send(ApiRequest::get("/api/echo")).await.unwrap();

        assert_eq!(echo, Echo { value: 42 });
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/api/echo");
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_rejection_uses_error_field_verbatim() {
        let (gateway, _, _) = gateway(
            MockTransport::new().reply(422, r#"{"error": "Ce créneau est complet"}"#),
            MockCredentialStore::new(),
        );

        let err = gateway
            .send::<Value>(ApiRequest::post("/api/reservations"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Ce créneau est complet");
        assert_eq!(err.status(), Some(422));
    }

    #[tokio::test]
    async fn test_rejection_without_error_field_uses_fallback() {
        let (gateway, _, _) = gateway(
            MockTransport::new()
                .reply(500, r#"{"detail": "boom"}"#)
                .reply(404, ""),
            MockCredentialStore::new(),
        );

        let err = gateway
            .send::<Value>(ApiRequest::get("/api/x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "an error occurred");

        let err = gateway
            .send::<Value>(ApiRequest::get("/api/x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "an error occurred");
    }

    #[tokio::test]
    async fn test_non_string_error_field_uses_fallback() {
        let (gateway, _, _) = gateway(
            MockTransport::new().reply(400, r#"{"error": {"code": 7}}"#),
            MockCredentialStore::new(),
        );

        let err = gateway
            .send::<Value>(ApiRequest::get("/api/x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "an error occurred");
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_credential_untouched() {
        let (gateway, transport, store) = gateway(
            MockTransport::new().fail("connection refused"),
            MockCredentialStore::with_credential("tok"),
        );

        let err = gateway
            .send_authenticated::<Value>(ApiRequest::get("/api/activities"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "connection error");
        assert!(err.is_transport());
        assert_eq!(transport.call_count(), 1);
        assert_eq!(store.stored().await.as_deref(), Some("tok"));
        assert_eq!(store.clear_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_connection_error() {
        let (gateway, _, _) = gateway(
            MockTransport::new()
                .reply(200, "<html>oops</html>")
                .reply(502, "<html>bad gateway</html>"),
            MockCredentialStore::new(),
        );

        for _ in 0..2 {
            let err = gateway
                .send::<Value>(ApiRequest::get("/api/x"))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "connection error");
        }
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_connection_error() {
        let (gateway, _, _) = gateway(
            MockTransport::new().reply(200, r#"{"other": true}"#),
            MockCredentialStore::new(),
        );

        let err = gateway
            .send::<Echo>(ApiRequest::get("/api/x"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let (gateway, transport, _) = gateway(
            MockTransport::new().reply(200, "[]"),
            MockCredentialStore::new(),
        );

        let err = gateway
            .send_authenticated::<Value>(ApiRequest::get("/api/activities"))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::MissingCredential);
        assert_eq!(err.to_string(), "credential not found");
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bearer_header_attached() {
        let (gateway, transport, _) = gateway(
            MockTransport::new().reply(200, "[]"),
            MockCredentialStore::with_credential("secret-token"),
        );

        let _: Vec<Value> = gateway
            .send_authenticated(ApiRequest::get("/api/activities"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_caller_content_type_wins() {
        let (gateway, transport, _) = gateway(
            MockTransport::new().reply(200, "{}"),
            MockCredentialStore::new(),
        );

        let _: Value = gateway
            .send(ApiRequest::post("/api/upload").header("content-type", "text/plain"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        let content_types: Vec<_> = request
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_body_reaches_transport_unchanged() {
        let (gateway, transport, _) = gateway(
            MockTransport::new().reply(201, "{}"),
            MockCredentialStore::new(),
        );

        let request = ApiRequest::post("/api/auth/register")
            .json(&serde_json::json!({"email": "a@b.com", "password": "p@ss"}))
            .unwrap();
        let _: Value = gateway.send(request).await.unwrap();

        let sent = transport.last_request().unwrap();
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"email": "a@b.com", "password": "p@ss"}));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_empty_payload() {
        let (gateway, _, _) = gateway(
            MockTransport::new().reply(204, ""),
            MockCredentialStore::with_credential("tok"),
        );

        let result: ApiResult<()> = gateway
            .send_authenticated(ApiRequest::delete("/api/activities/3"))
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let gateway = RequestGateway::new(
            Arc::new(MockTransport::new()),
            Arc::new(MockCredentialStore::new()),
            "http://api.test/",
        );
        assert_eq!(gateway.base_url(), "http://api.test");
    }
}
