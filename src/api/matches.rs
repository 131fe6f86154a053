//! Match endpoints

use super::client::{ApiResult, FaceitData, require};
use super::http_client::HttpTransport;
use super::urls::RequestUrl;

impl<T: HttpTransport> FaceitData<T> {
    pub async fn match_details(&self, match_id: &str) -> ApiResult {
        let match_id = require("match_details", "match_id", match_id)?;
        self.fetch(RequestUrl::new("/matches").segment(match_id)).await
    }

    /// Retrieves per-round and per-player statistics of a match.
    pub async fn match_stats(&self, match_id: &str) -> ApiResult {
        let match_id = require("match_stats", "match_id", match_id)?;
        self.fetch(RequestUrl::new("/matches").segment(match_id).literal("stats"))
            .await
    }
}
