use crate::constants::env_vars;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API token cannot be empty
/// - Base URL must use the http or https scheme
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_token: &str,
    base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_token.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "No API token configured. Set {} or run `faceit_data config set-token <TOKEN>`",
            env_vars::API_TOKEN
        )));
    }

    validate_settings(base_url, http_timeout_seconds, log_file_path)
}

/// Validates everything except the API token, which may still be unset while
/// the config file is being edited.
pub fn validate_settings(
    base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Base URL must start with http:// or https://, got '{base_url}'"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
