//! HTTP transport abstraction and the reqwest-backed implementation

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::error::AppError;

/// A single request header: lowercase name and value.
pub type Header = (&'static str, String);

/// Status and raw body of a completed GET request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The HTTP GET capability the client is built on.
///
/// Implementations perform exactly one request per call and must not retry.
/// Transport failures are returned as errors; any HTTP status, including
/// non-success ones, is returned as a [`TransportResponse`].
pub trait HttpTransport: Send + Sync {
    fn get(
        &self,
        url: &str,
        headers: &[Header],
    ) -> impl Future<Output = Result<TransportResponse, AppError>> + Send;
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a transport whose client applies the given request timeout.
    pub fn with_timeout(timeout_seconds: u64) -> Result<Self, AppError> {
        Ok(Self::new(create_http_client_with_timeout(timeout_seconds)?))
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[Header]) -> Result<TransportResponse, AppError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {status}");

        let body = response.bytes().await?;
        debug!("Response length: {} bytes", body.len());

        Ok(TransportResponse { status, body })
    }
}

/// Creates an HTTP client with a request timeout and a bounded idle connection pool.
///
/// # Arguments
/// * `timeout_seconds` - Total timeout applied to each request
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_reqwest_transport_sends_headers_and_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/games/cs2"))
            .and(header("authorization", "Bearer secret"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"game_id":"cs2"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::with_timeout(5).unwrap();
        let headers = vec![
            ("accept", "application/json".to_string()),
            ("authorization", "Bearer secret".to_string()),
        ];
        let response = transport
            .get(&format!("{}/games/cs2", mock_server.uri()), &headers)
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(&response.body[..], br#"{"game_id":"cs2"}"#);
    }

    #[tokio::test]
    async fn test_reqwest_transport_returns_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::default();
        let response = transport.get(&mock_server.uri(), &[]).await.unwrap();

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_failure_is_error() {
        // Nothing listens on port 9 on loopback in the test environment
        let transport = ReqwestTransport::with_timeout(2).unwrap();
        let result = transport.get("http://127.0.0.1:9/games", &[]).await;

        let error = result.unwrap_err();
        assert!(error.is_transport_error());
    }
}
