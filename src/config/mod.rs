use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, FACEIT_BASE_URL, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_config, validate_settings};

/// Configuration structure for the command-line tool.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// FACEIT Data API token sent as a bearer credential.
    #[serde(default)]
    pub api_token: String,
    /// Origin of the Data API. Defaults to the public FACEIT endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_base_url() -> String {
    FACEIT_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: String::new(),
            base_url: default_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file is not an error; values then come from the environment,
    /// and an explicit token (e.g. from the command line) takes precedence
    /// over both.
    ///
    /// # Environment Variables
    /// - `FACEIT_API_TOKEN` - Override API token
    /// - `FACEIT_BASE_URL` - Override API base URL
    /// - `FACEIT_LOG_FILE` - Override log file path
    /// - `FACEIT_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(AppError)` - Error occurred during load, or no token is configured
    pub async fn load_with_token(api_token: Option<String>) -> Result<Self, AppError> {
        let mut config = Self::load_file_or_default().await?;
        config.apply_env_overrides();

        if let Some(api_token) = api_token {
            config.api_token = api_token;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reads the config file if it exists, without environment overrides or validation.
    pub async fn load_file_or_default() -> Result<Self, AppError> {
        let config_path = get_config_path();
        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Overrides values with environment variables when they are set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_token) = std::env::var(env_vars::API_TOKEN) {
            self.api_token = api_token;
        }

        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_token,
            &self.base_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Validates the settings that do not depend on the API token.
    pub fn validate_settings(&self) -> Result<(), AppError> {
        validate_settings(
            &self.base_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The API token is masked.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Self::load_from_path(&config_path).await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Token:");
            println!("{}", mask_token(&config.api_token));
            println!("────────────────────────────────────");
            println!("Base URL:");
            println!("{}", config.base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips a trailing
    /// slash from the base URL.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Keeps the last four characters of a token visible.
pub fn mask_token(token: &str) -> String {
    let length = token.chars().count();
    if length == 0 {
        "(not set)".to_string()
    } else if length <= 4 {
        "****".to_string()
    } else {
        let visible: String = token.chars().skip(length - 4).collect();
        format!("****{visible}")
    }
}
