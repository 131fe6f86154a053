//! Team endpoints

use super::client::{ApiResult, FaceitData, require};
use super::http_client::HttpTransport;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    pub async fn team_details(&self, team_id: &str) -> ApiResult {
        let team_id = require("team_details", "team_id", team_id)?;
        self.fetch(RequestUrl::new("/teams").segment(team_id)).await
    }

    /// Retrieves the statistics of a team for one game.
    pub async fn team_stats(&self, team_id: &str, game_id: &str) -> ApiResult {
        let team_id = require("team_stats", "team_id", team_id)?;
        let game_id = require("team_stats", "game_id", game_id)?;

        let request = RequestUrl::new("/teams")
            .segment(team_id)
            .literal("stats")
            .segment(game_id);
        self.fetch(request).await
    }

    pub async fn team_tournaments(
        &self,
        team_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let team_id = require("team_tournaments", "team_id", team_id)?;

        let request = RequestUrl::new("/teams")
            .segment(team_id)
            .literal("tournaments")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}
