use faceit_data::api::{ReqwestTransport, TournamentType};
use faceit_data::{AppError, Config, FaceitData, MatchType};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "integration-token";

fn client_for(mock_server: &MockServer) -> FaceitData {
    FaceitData::new(TOKEN).with_base_url(mock_server.uri())
}

#[tokio::test]
async fn test_player_details_sends_bearer_token_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("nickname", "s1mple"))
        .and(query_param("game", "csgo"))
        .and(header("authorization", "Bearer integration-token"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"player_id": "ac71ba3c", "nickname": "s1mple"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let player = faceit
        .player_details(Some("s1mple"), Some("csgo"), None)
        .await
        .unwrap();

    assert_eq!(player.unwrap()["player_id"], "ac71ba3c");
}

#[tokio::test]
async fn test_championship_matches_with_explicit_paging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/championships/abc/matches"))
        .and(query_param("type", "past"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "start": 10})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let result = faceit
        .championship_matches("abc", Some(MatchType::Past), Some(10), Some(5))
        .await
        .unwrap();

    assert_eq!(result, Some(json!({"items": [], "start": 10})));
}

#[tokio::test]
async fn test_defaults_are_sent_when_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizers/org-1/tournaments"))
        .and(query_param("type", "upcoming"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let implicit = faceit
        .organizer_tournaments("org-1", None, None, None)
        .await
        .unwrap();
    let explicit = faceit
        .organizer_tournaments("org-1", Some(TournamentType::Upcoming), Some(0), Some(20))
        .await
        .unwrap();

    assert_eq!(implicit, explicit);
}

#[tokio::test]
async fn test_free_text_is_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/organizers"))
        .and(query_param("name", "a b&c/d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let result = faceit.search_organizers("a b&c/d", None, None).await.unwrap();

    assert!(result.is_some());
}

#[tokio::test]
async fn test_blank_refinement_is_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/players"))
        .and(query_param("nickname", "s1mple"))
        .and(query_param("country", "ua"))
        .and(query_param_is_missing("game"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let result = faceit
        .search_players("s1mple", Some(" "), Some("ua"), None, None)
        .await
        .unwrap();

    assert!(result.is_some());
}

#[tokio::test]
async fn test_not_found_is_absent_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matches/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": []})))
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let result = faceit.match_details("missing").await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_non_ok_success_codes_are_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);

    assert_eq!(faceit.all_faceit_games(None, None).await.unwrap(), None);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);
    let result = faceit.team_details("t1").await;

    assert!(matches!(result, Err(AppError::ApiParse(_))));
}

#[tokio::test]
async fn test_missing_argument_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let faceit = client_for(&mock_server);

    let organizer = faceit.organizer_details(None, None).await;
    assert!(organizer.unwrap_err().is_missing_argument());

    let history = faceit
        .player_matches("p1", None, None, None, None, None)
        .await;
    assert!(history.unwrap_err().is_missing_argument());

    let hub = faceit.hub_details("  ", false, false).await;
    assert!(hub.unwrap_err().is_missing_argument());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matches/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::with_timeout(1).unwrap();
    let faceit = FaceitData::with_transport(TOKEN, transport).with_base_url(mock_server.uri());
    let result = faceit.match_details("slow").await;

    assert!(result.unwrap_err().is_transport_error());
}

#[tokio::test]
async fn test_client_from_config_uses_configured_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tournaments/t-9/brackets"))
        .and(header("authorization", "Bearer from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rounds": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        api_token: "from-config".to_string(),
        base_url: format!("{}/", mock_server.uri()),
        ..Config::default()
    };
    let faceit = FaceitData::from_config(&config).unwrap();
    let result = faceit.tournament_brackets("t-9").await.unwrap();

    assert_eq!(result, Some(json!({"rounds": []})));
}
