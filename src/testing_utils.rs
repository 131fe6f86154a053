use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Mutex;

use crate::api::{FaceitData, Header, HttpTransport, TransportResponse};
use crate::constants::FACEIT_BASE_URL;
use crate::error::AppError;

/// Token used by clients built with [`stub_client`]
pub const TEST_TOKEN: &str = "test-token";

/// A request observed by [`StubTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<Header>,
}

/// In-memory transport that answers every request with a canned response and
/// records what was asked for.
pub struct StubTransport {
    response: Option<(StatusCode, Bytes)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    /// Responds 200 with the serialized value
    pub fn json(value: &Value) -> Self {
        Self::with_body(200, value.to_string())
    }

    /// Responds with the given status and an empty body
    pub fn with_status(status: u16) -> Self {
        Self::with_body(status, Bytes::new())
    }

    /// Responds with the given status and raw body
    pub fn with_body(status: u16, body: impl Into<Bytes>) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            response: Some((status, body.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A transport that panics when used, for asserting no request is sent
    pub fn unreachable() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    pub fn last_url(&self) -> Option<String> {
        self.requests().last().map(|request| request.url.clone())
    }
}

impl HttpTransport for StubTransport {
    async fn get(&self, url: &str, headers: &[Header]) -> Result<TransportResponse, AppError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers.to_vec(),
            });

        match &self.response {
            Some((status, body)) => Ok(TransportResponse::new(*status, body.clone())),
            None => panic!("no request expected, but GET {url} was sent"),
        }
    }
}

/// Builds a client with [`TEST_TOKEN`] on top of the given stub
pub fn stub_client(transport: StubTransport) -> FaceitData<StubTransport> {
    FaceitData::with_transport(TEST_TOKEN, transport)
}

/// Path and query of the last request, relative to the public base URL
pub fn requested_path(faceit: &FaceitData<StubTransport>) -> Option<String> {
    faceit
        .transport()
        .last_url()
        .and_then(|url| url.strip_prefix(FACEIT_BASE_URL).map(str::to_string))
}
