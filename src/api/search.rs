//! Search endpoints
//!
//! Every search takes a free-text name or nickname which is percent-encoded
//! into the query string. Where two refinements are accepted (game or region,
//! game or country) only the game is sent when both are supplied.

use super::client::{ApiResult, FaceitData, require};
use super::http_client::HttpTransport;
use super::params::MatchType;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    /// Searches championships by name.
    ///
    /// # Arguments
    /// * `name` - Free text to search for
    /// * `type_of_competition` - State of the championships (default: all)
    /// * `game` - Restrict to one game
    /// * `region` - Restrict to one region, ignored when `game` is given
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn search_championships(
        &self,
        name: &str,
        type_of_competition: Option<MatchType>,
        game: Option<&str>,
        region: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let name = require("search_championships", "name", name)?;

        let request = RequestUrl::new("/search/championships")
            .param("name", name)
            .param("type", type_of_competition.unwrap_or_default())
            .either_param(("game", game), ("region", region))
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Searches hubs by name. `game` takes precedence over `region`.
    pub async fn search_hubs(
        &self,
        name: &str,
        game: Option<&str>,
        region: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let name = require("search_hubs", "name", name)?;

        let request = RequestUrl::new("/search/hubs")
            .param("name", name)
            .either_param(("game", game), ("region", region))
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    pub async fn search_organizers(
        &self,
        name: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let name = require("search_organizers", "name", name)?;

        let request = RequestUrl::new("/search/organizers")
            .param("name", name)
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Searches players by nickname. `game` takes precedence over `country`.
    pub async fn search_players(
        &self,
        nickname: &str,
        game: Option<&str>,
        country: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let nickname = require("search_players", "nickname", nickname)?;

        let request = RequestUrl::new("/search/players")
            .param("nickname", nickname)
            .either_param(("game", game), ("country", country))
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    pub async fn search_teams(
        &self,
        nickname: &str,
        game: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let nickname = require("search_teams", "nickname", nickname)?;

        let request = RequestUrl::new("/search/teams")
            .param("nickname", nickname)
            .optional_param("game", game)
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Searches tournaments by name, with the same refinements as
    /// [`search_championships`](Self::search_championships).
    pub async fn search_tournaments(
        &self,
        name: &str,
        type_of_competition: Option<MatchType>,
        game: Option<&str>,
        region: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let name = require("search_tournaments", "name", name)?;

        let request = RequestUrl::new("/search/tournaments")
            .param("name", name)
            .param("type", type_of_competition.unwrap_or_default())
            .either_param(("game", game), ("region", region))
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}
