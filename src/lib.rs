//! Client for the FACEIT Data API v4
//!
//! This library wraps the read-only endpoints of the FACEIT Data API. Every
//! operation builds a request URL from its arguments, sends an authenticated
//! GET and hands back the decoded JSON body. Non-success responses are
//! reported as `Ok(None)`; missing identifiers are rejected before anything
//! is sent.
//!
//! # Examples
//!
//! ```rust,no_run
//! use faceit_data::{AppError, FaceitData, MatchType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let faceit = FaceitData::new("your-api-token");
//!
//!     if let Some(player) = faceit.player_details(Some("s1mple"), Some("csgo"), None).await? {
//!         println!("{}", player["player_id"]);
//!     }
//!
//!     let matches = faceit
//!         .championship_matches("championship-id", Some(MatchType::Past), None, Some(5))
//!         .await?;
//!     println!("{matches:?}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use api::{ApiResult, FaceitData, MatchType, TournamentType};
pub use config::Config;
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
