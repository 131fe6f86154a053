//! Organizer endpoints

use super::client::{ApiResult, FaceitData, non_blank, require};
use super::http_client::HttpTransport;
use super::params::TournamentType;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::error::AppError;

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves organizer details by name or by ID.
    ///
    /// Looking up by name sends `/organizers?name=<name>`, looking up by ID sends
    /// `/organizers/<id>`. The name wins when both are given; giving neither is a
    /// missing argument error.
    pub async fn organizer_details(
        &self,
        name_of_organizer: Option<&str>,
        organizer_id: Option<&str>,
    ) -> ApiResult {
        let request = match (non_blank(name_of_organizer), non_blank(organizer_id)) {
            (Some(name), _) => RequestUrl::new("/organizers").param("name", name),
            (None, Some(organizer_id)) => RequestUrl::new("/organizers").segment(organizer_id),
            (None, None) => {
                return Err(AppError::missing_argument(
                    "organizer_details",
                    "name_of_organizer or organizer_id",
                ));
            }
        };
        self.fetch(request).await
    }

    pub async fn organizer_championships(
        &self,
        organizer_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let organizer_id = require("organizer_championships", "organizer_id", organizer_id)?;

        let request = RequestUrl::new("/organizers")
            .segment(organizer_id)
            .literal("championships")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves all games an organizer is involved with.
    pub async fn organizer_games(&self, organizer_id: &str) -> ApiResult {
        let organizer_id = require("organizer_games", "organizer_id", organizer_id)?;
        self.fetch(RequestUrl::new("/organizers").segment(organizer_id).literal("games"))
            .await
    }

    pub async fn organizer_hubs(
        &self,
        organizer_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let organizer_id = require("organizer_hubs", "organizer_id", organizer_id)?;

        let request = RequestUrl::new("/organizers")
            .segment(organizer_id)
            .literal("hubs")
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    /// Retrieves the tournaments of an organizer.
    ///
    /// # Arguments
    /// * `organizer_id` - The ID of the organizer
    /// * `type_of_tournament` - Upcoming (default) or past tournaments
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn organizer_tournaments(
        &self,
        organizer_id: &str,
        type_of_tournament: Option<TournamentType>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let organizer_id = require("organizer_tournaments", "organizer_id", organizer_id)?;

        let request = RequestUrl::new("/organizers")
            .segment(organizer_id)
            .literal("tournaments")
            .param("type", type_of_tournament.unwrap_or_default())
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}
