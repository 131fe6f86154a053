//! Application-wide constants and configuration values
//!
//! This module centralizes the wire constants and defaults so that
//! endpoint modules and configuration share one source of truth.

/// Fixed origin of the FACEIT Data API v4
pub const FACEIT_BASE_URL: &str = "https://open.faceit.com/data/v4";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Pagination defaults shared by list endpoints
pub mod pagination {
    /// Default starting item position
    pub const DEFAULT_OFFSET: u32 = 0;

    /// Default page size for most list endpoints
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Default page size for championship subscriptions
    pub const SUBSCRIPTIONS_LIMIT: u32 = 10;
}

/// Header names sent with every request
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const AUTHORIZATION: &str = "authorization";
    pub const ACCEPT_JSON: &str = "application/json";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the API token
    pub const API_TOKEN: &str = "FACEIT_API_TOKEN";

    /// Environment variable for base URL override
    pub const BASE_URL: &str = "FACEIT_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FACEIT_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "FACEIT_HTTP_TIMEOUT";
}

/// Name of the directory used under the platform config dir
pub const APP_DIR_NAME: &str = "faceit_data";

/// Default log file name
pub const LOG_FILE_NAME: &str = "faceit_data.log";
