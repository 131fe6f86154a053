//! Hub endpoints

use super::client::{ApiResult, FaceitData, expanded, require};
use super::http_client::HttpTransport;
use super::params::MatchType;
use super::urls::RequestUrl;
use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};

impl<T: HttpTransport> FaceitData<T> {
    /// Retrieves hub details, optionally inlining the game or the organizer.
    /// The game expansion wins when both are requested.
    pub async fn hub_details(
        &self,
        hub_id: &str,
        expand_game: bool,
        expand_organizer: bool,
    ) -> ApiResult {
        let hub_id = require("hub_details", "hub_id", hub_id)?;

        let request = RequestUrl::new("/hubs").segment(hub_id);
        let request = expanded(request, ("game", expand_game), ("organizer", expand_organizer));
        self.fetch(request).await
    }

    /// Retrieves the matches of a hub.
    ///
    /// # Arguments
    /// * `hub_id` - The ID of the hub
    /// * `type_of_match` - Kind of matches to return (default: all)
    /// * `offset` - The starting item position (default: 0)
    /// * `limit` - The number of items to return (default: 20)
    pub async fn hub_matches(
        &self,
        hub_id: &str,
        type_of_match: Option<MatchType>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let hub_id = require("hub_matches", "hub_id", hub_id)?;

        let request = RequestUrl::new("/hubs")
            .segment(hub_id)
            .literal("matches")
            .param("type", type_of_match.unwrap_or_default())
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }

    pub async fn hub_members(&self, hub_id: &str, offset: Option<u32>, limit: Option<u32>) -> ApiResult {
        let hub_id = require("hub_members", "hub_id", hub_id)?;
        self.hub_listing(hub_id, "members", offset, limit).await
    }

    /// Retrieves the roles members can have in a hub.
    pub async fn hub_roles(&self, hub_id: &str, offset: Option<u32>, limit: Option<u32>) -> ApiResult {
        let hub_id = require("hub_roles", "hub_id", hub_id)?;
        self.hub_listing(hub_id, "roles", offset, limit).await
    }

    pub async fn hub_statistics(
        &self,
        hub_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let hub_id = require("hub_statistics", "hub_id", hub_id)?;
        self.hub_listing(hub_id, "stats", offset, limit).await
    }

    async fn hub_listing(
        &self,
        hub_id: &str,
        resource: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult {
        let request = RequestUrl::new("/hubs")
            .segment(hub_id)
            .literal(resource)
            .page(offset.unwrap_or(DEFAULT_OFFSET), limit.unwrap_or(DEFAULT_LIMIT));
        self.fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MatchType;
    use crate::testing_utils::{StubTransport, requested_path, stub_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_hub_details_expansions() {
        let faceit = stub_client(StubTransport::json(&json!({"hub_id": "h1"})));

        faceit.hub_details("h1", false, false).await.unwrap();
        assert_eq!(requested_path(&faceit).as_deref(), Some("/hubs/h1"));

        faceit.hub_details("h1", true, true).await.unwrap();
        assert_eq!(requested_path(&faceit).as_deref(), Some("/hubs/h1?expanded=game"));

        faceit.hub_details("h1", false, true).await.unwrap();
        assert_eq!(requested_path(&faceit).as_deref(), Some("/hubs/h1?expanded=organizer"));
    }

    #[tokio::test]
    async fn test_hub_matches() {
        let faceit = stub_client(StubTransport::json(&json!({"items": []})));

        faceit.hub_matches("h1", None, None, None).await.unwrap();
        assert_eq!(
            requested_path(&faceit).as_deref(),
            Some("/hubs/h1/matches?type=all&offset=0&limit=20")
        );

        faceit
            .hub_matches("h1", Some(MatchType::Ongoing), Some(5), Some(50))
            .await
            .unwrap();
        assert_eq!(
            requested_path(&faceit).as_deref(),
            Some("/hubs/h1/matches?type=ongoing&offset=5&limit=50")
        );
    }

    #[tokio::test]
    async fn test_hub_listings() {
        let faceit = stub_client(StubTransport::json(&json!({"items": []})));

        faceit.hub_members("h1", None, None).await.unwrap();
        assert_eq!(requested_path(&faceit).as_deref(), Some("/hubs/h1/members?offset=0&limit=20"));

        faceit.hub_roles("h1", Some(2), None).await.unwrap();
        assert_eq!(requested_path(&faceit).as_deref(), Some("/hubs/h1/roles?offset=2&limit=20"));

        faceit.hub_statistics("h1", None, Some(3)).await.unwrap();
        assert_eq!(requested_path(&faceit).as_deref(), Some("/hubs/h1/stats?offset=0&limit=3"));
    }

    #[tokio::test]
    async fn test_hub_missing_id_sends_nothing() {
        let faceit = stub_client(StubTransport::unreachable());

        assert!(faceit.hub_details("", true, false).await.unwrap_err().is_missing_argument());
        assert!(faceit.hub_matches("", None, None, None).await.unwrap_err().is_missing_argument());
        assert!(faceit.hub_members("", None, None).await.unwrap_err().is_missing_argument());
        assert!(faceit.hub_roles("", None, None).await.unwrap_err().is_missing_argument());
        assert!(faceit.hub_statistics("", None, None).await.unwrap_err().is_missing_argument());
    }

    #[tokio::test]
    async fn test_hub_forbidden_is_absent() {
        let faceit = stub_client(StubTransport::with_status(403));
        assert_eq!(faceit.hub_members("h1", None, None).await.unwrap(), None);
    }
}
