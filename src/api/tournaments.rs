//! Tournament endpoints

use super::client::{ApiResult, FaceitData, expanded, require};
use super::http_client::HttpTransport;
use super::params::TournamentType;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    /// Lists tournaments.
    ///
    /// # Arguments
    /// * `type_of_tournament` - Upcoming (default) or past tournaments
    /// * `game` - Restrict to one game
    /// * `region` - Restrict to one region, ignored when `game` is given
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn all_tournaments(
        &self,
        type_of_tournament: Option<TournamentType>,
        game: Option<&str>,
        region: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let request = RequestUrl::new("/tournaments")
            .param("type", type_of_tournament.unwrap_or_default())
            .either_param(("game", game), ("region", region))
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves tournament details. The organizer expansion wins when both
    /// expansions are requested.
    pub async fn tournament_details(
        &self,
        tournament_id: &str,
        expand_organizer: bool,
        expand_game: bool,
    ) -> ApiResult {
        let tournament_id = require("tournament_details", "tournament_id", tournament_id)?;

        let request = RequestUrl::new("/tournaments").segment(tournament_id);
        let request = expanded(request, ("organizer", expand_organizer), ("game", expand_game));
        self.fetch(request).await
    }

    pub async fn tournament_brackets(&self, tournament_id: &str) -> ApiResult {
        let tournament_id = require("tournament_brackets", "tournament_id", tournament_id)?;
        self.fetch(RequestUrl::new("/tournaments").segment(tournament_id).literal("brackets"))
            .await
    }

    pub async fn tournament_matches(
        &self,
        tournament_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let tournament_id = require("tournament_matches", "tournament_id", tournament_id)?;

        let request = RequestUrl::new("/tournaments")
            .segment(tournament_id)
            .literal("matches")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves the teams taking part in a tournament.
    pub async fn tournament_teams(
        &self,
        tournament_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let tournament_id = require("tournament_teams", "tournament_id", tournament_id)?;

        let request = RequestUrl::new("/tournaments")
            .segment(tournament_id)
            .literal("teams")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}
