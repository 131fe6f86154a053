//! Championship endpoints

use super::client::{ApiResult, FaceitData, expanded, require};
use super::http_client::HttpTransport;
use super::params::MatchType;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, SUBSCRIPTIONS_LIMIT};

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves championship details.
    ///
    /// The service can inline the game or the organizer entity. When both
    /// expansions are requested only the game is expanded.
    ///
    /// # Arguments
    /// * `championship_id` - The ID of the championship
    /// * `expand_game` - Inline the game entity
    /// * `expand_organizer` - Inline the organizer entity
    pub async fn championship_details(
        &self,
        championship_id: &str,
        expand_game: bool,
        expand_organizer: bool,
    ) -> ApiResult {
        let championship_id = require("championship_details", "championship_id", championship_id)?;

        let request = RequestUrl::new("/championships").segment(championship_id);
        let request = expanded(request, ("game", expand_game), ("organizer", expand_organizer));
        self.fetch(request).await
    }

    /// Retrieves the matches of a championship.
    ///
    /// # Arguments
    /// * `championship_id` - The championship ID
    /// * `type_of_match` - Kind of matches to return (default: all)
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn championship_matches(
        &self,
        championship_id: &str,
        type_of_match: Option<MatchType>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let championship_id = require("championship_matches", "championship_id", championship_id)?;

        let request = RequestUrl::new("/championships")
            .segment(championship_id)
            .literal("matches")
            .param("type", type_of_match.unwrap_or_default())
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves the subscriptions of a championship. Pages default to 10 items.
    pub async fn championship_subscriptions(
        &self,
        championship_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let championship_id =
            require("championship_subscriptions", "championship_id", championship_id)?;

        let request = RequestUrl::new("/championships")
            .segment(championship_id)
            .literal("subscriptions")
            .page(
                offset.unwrap_or(DEFAULT_OFFSET),
                limit.unwrap_or(SUBSCRIPTIONS_LIMIT),
            );
        self.fetch(request).await
    }
}
