//! The request client shared by every endpoint family

use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, instrument, warn};

use super::http_client::{Header, HttpTransport, ReqwestTransport};
use super::urls::RequestUrl;
use crate::config::Config;
use crate::constants::{FACEIT_BASE_URL, headers};
use crate::error::AppError;

/// Result of every endpoint operation.
///
/// `Ok(Some(value))` carries the decoded body of a 200 response unchanged,
/// `Ok(None)` means the service answered with any other status.
pub type ApiResult = Result<Option<Value>, AppError>;

/// Client for the FACEIT Data API v4.
///
/// Holds the API token, the base URL and the request headers derived from the
/// token. None of these change after construction, so a single instance can be
/// shared by reference across tasks.
///
/// # Example
/// ```rust,no_run
/// use faceit_data::FaceitData;
///
/// #[tokio::main]
/// async fn main() -> Result<(), faceit_data::AppError> {
///     let faceit = FaceitData::new("my-api-token");
///     if let Some(player) = faceit.player_details(Some("s1mple"), None, None).await? {
///         println!("{}", player["player_id"]);
///     }
///     Ok(())
/// }
/// ```
pub struct FaceitData<T = ReqwestTransport> {
    api_token: String,
    base_url: String,
    headers: Vec<Header>,
    transport: T,
}

impl FaceitData<ReqwestTransport> {
    /// Creates a client for the public API origin with a default reqwest transport.
    /// Performs no network I/O.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_transport(api_token, ReqwestTransport::default())
    }

    /// Creates a client from application configuration, honoring the configured
    /// base URL and HTTP timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_transport(config.api_token.clone(), transport).with_base_url(&config.base_url))
    }
}

impl<T> FaceitData<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(api_token: impl Into<String>, transport: T) -> Self {
        let api_token = api_token.into();
        let headers = vec![
            (headers::ACCEPT, headers::ACCEPT_JSON.to_string()),
            (headers::AUTHORIZATION, format!("Bearer {api_token}")),
        ];

        Self {
            api_token,
            base_url: FACEIT_BASE_URL.to_string(),
            headers,
            transport,
        }
    }

    /// Points the client at another origin, e.g. a proxy or a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: HttpTransport> FaceitData<T> {
    /// Sends one GET request and decodes a 200 response body as JSON.
    #[instrument(skip_all, fields(request = %request))]
    pub(crate) async fn fetch(&self, request: RequestUrl) -> ApiResult {
        let url = request.to_url(&self.base_url);
        debug!("Fetching data from URL: {url}");

        let response = self.transport.get(&url, &self.headers).await?;

        if response.status != StatusCode::OK {
            let reason = response.status.canonical_reason().unwrap_or("Unknown status");
            warn!("HTTP {} - {} (URL: {})", response.status.as_u16(), reason, url);
            return Ok(None);
        }

        let value = serde_json::from_slice(&response.body)?;
        info!("Received {} bytes from {}", response.body.len(), request.path());
        Ok(Some(value))
    }
}

impl<T> fmt::Debug for FaceitData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceitData")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Treats a blank or whitespace-only value as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the identifier, or a missing argument error when it is blank.
pub(crate) fn require<'a>(
    operation: &'static str,
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        Err(AppError::missing_argument(operation, argument))
    } else {
        Ok(value)
    }
}

/// Like [`require`] for identifiers that are optional in the signature.
pub(crate) fn require_some<'a>(
    operation: &'static str,
    argument: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, AppError> {
    require(operation, argument, value.unwrap_or_default())
}

/// Adds `expanded=<entity>` for the first requested expansion.
pub(crate) fn expanded(
    request: RequestUrl,
    preferred: (&'static str, bool),
    fallback: (&'static str, bool),
) -> RequestUrl {
    match (preferred, fallback) {
        ((entity, true), _) | (_, (entity, true)) => request.param("expanded", entity),
        _ => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{StubTransport, stub_client};
    use serde_json::json;

    #[test]
    fn test_headers_derived_from_token() {
        let faceit = FaceitData::new("abc123");
        assert_eq!(
            faceit.headers(),
            &[
                ("accept", "application/json".to_string()),
                ("authorization", "Bearer abc123".to_string()),
            ]
        );
        assert_eq!(faceit.base_url(), "https://open.faceit.com/data/v4");
        assert_eq!(faceit.api_token(), "abc123");
    }

    #[test]
    fn test_debug_output_hides_token() {
        let faceit = FaceitData::new("super-secret");
        let debug = format!("{faceit:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let config = Config {
            api_token: "token".to_string(),
            base_url: "http://localhost:8080".to_string(),
            log_file_path: None,
            http_timeout_seconds: 5,
        };
        let faceit = FaceitData::from_config(&config).unwrap();
        assert_eq!(faceit.base_url(), "http://localhost:8080");
        assert_eq!(faceit.headers()[1].1, "Bearer token");
    }

    #[test]
    fn test_require_rejects_blank_values() {
        assert!(require("op", "id", "").unwrap_err().is_missing_argument());
        assert!(require("op", "id", "   ").unwrap_err().is_missing_argument());
        assert_eq!(require("op", "id", "x").unwrap(), "x");
        assert!(require_some("op", "id", None).unwrap_err().is_missing_argument());
        assert_eq!(require_some("op", "id", Some("y")).unwrap(), "y");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" \t")), None);
        assert_eq!(non_blank(Some("cs2")), Some("cs2"));
    }

    #[test]
    fn test_expanded_precedence() {
        let both = expanded(RequestUrl::new("/hubs"), ("game", true), ("organizer", true));
        assert_eq!(both.to_string(), "/hubs?expanded=game");
        let second = expanded(RequestUrl::new("/hubs"), ("game", false), ("organizer", true));
        assert_eq!(second.to_string(), "/hubs?expanded=organizer");
        let none = expanded(RequestUrl::new("/hubs"), ("game", false), ("organizer", false));
        assert_eq!(none.to_string(), "/hubs");
    }

    #[tokio::test]
    async fn test_fetch_returns_decoded_body_unchanged() {
        let body = json!({"items": [{"id": 1}, {"id": 2}], "start": 0, "end": 2});
        let faceit = stub_client(StubTransport::json(&body));

        let result = faceit.fetch(RequestUrl::new("/games")).await.unwrap();

        assert_eq!(result, Some(body));
        let requests = faceit.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://open.faceit.com/data/v4/games");
        assert_eq!(requests[0].headers, faceit.headers());
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_absent() {
        for status in [201, 204, 301, 400, 401, 404, 429, 500, 503] {
            let faceit = stub_client(StubTransport::with_status(status));
            let result = faceit.fetch(RequestUrl::new("/games")).await.unwrap();
            assert_eq!(result, None, "status {status} should yield no result");
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_parse_error() {
        let faceit = stub_client(StubTransport::with_body(200, "<html>oops</html>"));
        let result = faceit.fetch(RequestUrl::new("/games")).await;
        assert!(matches!(result, Err(AppError::ApiParse(_))));
    }

    #[tokio::test]
    async fn test_fetch_uses_custom_base_url() {
        let faceit = stub_client(StubTransport::json(&json!({}))).with_base_url("http://proxy.local/v4/");
        faceit.fetch(RequestUrl::new("/matches").segment("m1")).await.unwrap();
        assert_eq!(
            faceit.transport().last_url().as_deref(),
            Some("http://proxy.local/v4/matches/m1")
        );
    }
}
