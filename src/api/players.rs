//! Player endpoints

use super::client::{ApiResult, FaceitData, non_blank, require, require_some};
use super::http_client::HttpTransport;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::error::AppError;

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves player details by FACEIT nickname or by the player's ID on a
    /// game platform.
    ///
    /// At least one of `nickname` and `game_player_id` is required. Parameters
    /// are sent in `nickname`, `game_player_id`, `game` order.
    ///
    /// # Arguments
    /// * `nickname` - The nickname of the player on FACEIT
    /// * `game` - A game on FACEIT to narrow the lookup to
    /// * `game_player_id` - The ID of a player on a game's platform
    pub async fn player_details(
        &self,
        nickname: Option<&str>,
        game: Option<&str>,
        game_player_id: Option<&str>,
    ) -> ApiResult {
        let nickname = non_blank(nickname);
        let game_player_id = non_blank(game_player_id);
        if nickname.is_none() && game_player_id.is_none() {
            return Err(AppError::missing_argument(
                "player_details",
                "nickname or game_player_id",
            ));
        }

        let request = RequestUrl::new("/players")
            .optional_param("nickname", nickname)
            .optional_param("game_player_id", game_player_id)
            .optional_param("game", game);
        self.fetch(request).await
    }

    pub async fn player_id_details(&self, player_id: &str) -> ApiResult {
        let player_id = require("player_id_details", "player_id", player_id)?;
        self.fetch(RequestUrl::new("/players").segment(player_id)).await
    }

    /// Retrieves the match history of a player.
    ///
    /// With a time window (`from` and/or `to`, unix timestamps) the window
    /// bounds are sent along with `game` when given. Without a window the
    /// paginated history of one game is requested, and `game` is required.
    ///
    /// # Arguments
    /// * `player_id` - The ID of the player
    /// * `game` - A game on FACEIT
    /// * `from` - Lower bound of the window
    /// * `to` - Upper bound of the window
    /// * `offset` - The starting item position, used without a window (default: 0)
    /// * `limit` - The number of items to return, used without a window (default: 20)
    pub async fn player_matches(
        &self,
        player_id: &str,
        game: Option<&str>,
        from: Option<i64>,
        to: Option<i64>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let player_id = require("player_matches", "player_id", player_id)?;
        let history = RequestUrl::new("/players").segment(player_id).literal("history");

        let request = if from.is_none() && to.is_none() {
            let game = require_some("player_matches", "game", game)?;
            history
                .param("game", game)
                .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT))
        } else {
            history
                .optional_param("game", game)
                .optional_param("from", from)
                .optional_param("to", to)
        };
        self.fetch(request).await
    }

    pub async fn player_hubs(
        &self,
        player_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let player_id = require("player_hubs", "player_id", player_id)?;

        let request = RequestUrl::new("/players")
            .segment(player_id)
            .literal("hubs")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves the lifetime and per-map statistics of a player for one game.
    pub async fn player_stats(&self, player_id: &str, game_id: &str) -> ApiResult {
        let player_id = require("player_stats", "player_id", player_id)?;
        let game_id = require("player_stats", "game_id", game_id)?;

        let request = RequestUrl::new("/players")
            .segment(player_id)
            .literal("stats")
            .segment(game_id);
        self.fetch(request).await
    }

    pub async fn player_tournaments(
        &self,
        player_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let player_id = require("player_tournaments", "player_id", player_id)?;

        let request = RequestUrl::new("/players")
            .segment(player_id)
            .literal("tournaments")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}
