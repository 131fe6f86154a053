use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A mandatory identifier was absent or blank. Raised before any request is sent.
    #[error("Missing required argument `{argument}` for {operation}")]
    MissingArgument {
        operation: &'static str,
        argument: &'static str,
    },

    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a missing argument error for the given operation and parameter name
    pub fn missing_argument(operation: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument {
            operation,
            argument,
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if the error was raised by local argument validation, i.e. no request was sent
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, AppError::MissingArgument { .. })
    }

    /// Check if the error came from the transport (DNS, connection refused, timeout, ...)
    pub fn is_transport_error(&self) -> bool {
        matches!(self, AppError::ApiFetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_helper() {
        let error = AppError::missing_argument("match_details", "match_id");
        assert!(matches!(
            error,
            AppError::MissingArgument {
                operation: "match_details",
                argument: "match_id"
            }
        ));
        assert_eq!(
            error.to_string(),
            "Missing required argument `match_id` for match_details"
        );
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(AppError::missing_argument("hub_details", "hub_id").is_missing_argument());
        assert!(!AppError::config_error("x").is_missing_argument());
        assert!(!AppError::missing_argument("hub_details", "hub_id").is_transport_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: AppError = json_error.into();
        assert!(matches!(error, AppError::ApiParse(_)));
        assert!(error.to_string().starts_with("Failed to parse API response"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: config.toml");
    }
}
