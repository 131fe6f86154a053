//! Global ranking endpoints

use super::client::{ApiResult, FaceitData, require};
use super::http_client::HttpTransport;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves the global ranking of a game in a region, optionally narrowed
    /// to one country.
    ///
    /// # Arguments
    /// * `game_id` - The ID of the game
    /// * `region` - A region of the game, e.g. `EU`
    /// * `country` - Country code (ISO 3166-1), omitted when absent
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn game_global_ranking(
        &self,
        game_id: &str,
        region: &str,
        country: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let game_id = require("game_global_ranking", "game_id", game_id)?;
        let region = require("game_global_ranking", "region", region)?;

        let request = RequestUrl::new("/rankings/games")
            .segment(game_id)
            .literal("regions")
            .segment(region)
            .optional_param("country", country)
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves a player's position in the global ranking of a game and
    /// region, together with the surrounding `limit` entries.
    pub async fn player_position_global_ranking(
        &self,
        game_id: &str,
        region: &str,
        player_id: &str,
        country: Option<&str>,
        limit: Option<u32>,
    ) -> ApiResult {
        const OPERATION: &str = "player_position_global_ranking";
        let game_id = require(OPERATION, "game_id", game_id)?;
        let region = require(OPERATION, "region", region)?;
        let player_id = require(OPERATION, "player_id", player_id)?;

        let request = RequestUrl::new("/rankings/games")
            .segment(game_id)
            .literal("regions")
            .segment(region)
            .literal("players")
            .segment(player_id)
            .optional_param("country", country)
            .param("limit", limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}
