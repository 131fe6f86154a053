//! Leaderboard endpoints

use super::client::{ApiResult, FaceitData, require};
use super::http_client::HttpTransport;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves all leaderboards of a championship.
    pub async fn championship_leaderboards(
        &self,
        championship_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let championship_id =
            require("championship_leaderboards", "championship_id", championship_id)?;

        let request = RequestUrl::new("/leaderboards/championships").segment(championship_id);
        self.fetch(paged(request, offset, limit)).await
    }

    /// Retrieves the ranking of one group of a championship.
    ///
    /// # Arguments
    /// * `championship_id` - The ID of a championship
    /// * `group` - A group of the championship
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn championship_group_ranking(
        &self,
        championship_id: &str,
        group: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let championship_id =
            require("championship_group_ranking", "championship_id", championship_id)?;
        let group = require("championship_group_ranking", "group", group)?;

        let request = RequestUrl::new("/leaderboards/championships")
            .segment(championship_id)
            .literal("groups")
            .segment(group);
        self.fetch(paged(request, offset, limit)).await
    }

    pub async fn hub_leaderboards(
        &self,
        hub_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let hub_id = require("hub_leaderboards", "hub_id", hub_id)?;

        let request = RequestUrl::new("/leaderboards/hubs").segment(hub_id);
        self.fetch(paged(request, offset, limit)).await
    }

    /// Retrieves the all-time ranking of a hub.
    pub async fn hub_ranking(
        &self,
        hub_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let hub_id = require("hub_ranking", "hub_id", hub_id)?;

        let request = RequestUrl::new("/leaderboards/hubs")
            .segment(hub_id)
            .literal("general");
        self.fetch(paged(request, offset, limit)).await
    }

    /// Retrieves the ranking of one season of a hub.
    pub async fn hub_season_ranking(
        &self,
        hub_id: &str,
        season: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let hub_id = require("hub_season_ranking", "hub_id", hub_id)?;
        let season = require("hub_season_ranking", "season", season)?;

        let request = RequestUrl::new("/leaderboards/hubs")
            .segment(hub_id)
            .literal("seasons")
            .segment(season);
        self.fetch(paged(request, offset, limit)).await
    }

    pub async fn leaderboard_ranking(
        &self,
        leaderboard_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let leaderboard_id = require("leaderboard_ranking", "leaderboard_id", leaderboard_id)?;

        let request = RequestUrl::new("/leaderboards").segment(leaderboard_id);
        self.fetch(paged(request, offset, limit)).await
    }
}

fn paged(request: RequestUrl, offset: Option<u32>, limit: Option<u32>) -> RequestUrl {
    request.page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT))
}
