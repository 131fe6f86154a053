//! Game endpoints

use super::client::{ApiResult, FaceitData, require};
use super::http_client::HttpTransport;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves details of all games on FACEIT (default page: offset 0, limit 20).
    pub async fn all_faceit_games(&self, offset: Option<u32>, limit: Option<u32>) -> ApiResult {
        let request = RequestUrl::new("/games")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    pub async fn game_details(&self, game_id: &str) -> ApiResult {
        let game_id = require("game_details", "game_id", game_id)?;
        self.fetch(RequestUrl::new("/games").segment(game_id)).await
    }

    /// Retrieves the parent game of a region-specific game.
    pub async fn game_details_parent(&self, game_id: &str) -> ApiResult {
        let game_id = require("game_details_parent", "game_id", game_id)?;
        self.fetch(RequestUrl::new("/games").segment(game_id).literal("parent"))
            .await
    }
}
