//! HTTP-level tests for the rate-limited client, against a mock server.

use std::sync::Arc;
use std::time::{Duration, Instant};

use httpmock::prelude::*;

use ezgg::config::Config;
use ezgg::error::ApiError;
use ezgg::riot::RiotClient;

fn client_for(server: &MockServer) -> RiotClient {
    RiotClient::new(&Config::for_key("RGAPI-TEST".into()))
        .unwrap()
        .with_base_url(server.base_url())
}

#[tokio::test]
async fn ok_response_decodes_into_typed_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/Player/NA1")
                .header("X-Riot-Token", "RGAPI-TEST");
            then.status(200)
                .json_body(serde_json::json!({ "puuid": "abc-123", "gameName": "Player" }));
        })
        .await;

    let client = client_for(&server);
    let account = client.get_account_by_riot_id("Player", "NA1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.puuid.as_deref(), Some("abc-123"));
    assert_eq!(account.tag_line, None);
}

#[tokio::test]
async fn riot_id_path_segments_are_percent_encoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path_contains("/accounts/by-riot-id/Le%20Conservateur/3012");
            then.status(200).json_body(serde_json::json!({ "puuid": "abc" }));
        })
        .await;

    let client = client_for(&server);
    let account = client
        .get_account_by_riot_id("Le Conservateur", "3012")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(account.puuid.as_deref(), Some("abc"));
}

#[tokio::test]
async fn account_404_maps_to_player_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/accounts/by-riot-id/");
            then.status(404);
        })
        .await;

    let client = client_for(&server);
    let err = client
        .get_account_by_riot_id("Ghost", "EUW")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::PlayerNotFound { game_name, tag_line } if game_name == "Ghost" && tag_line == "EUW"
    ));
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/lol/summoner/");
            then.status(500);
        })
        .await;

    let client = client_for(&server);
    let err = client.get_summoner_by_puuid("puuid-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn malformed_body_fails_with_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/lol/summoner/");
            then.status(200).body("definitely not json");
        })
        .await;

    let client = client_for(&server);
    let err = client.get_summoner_by_puuid("puuid-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn throttled_request_backs_off_for_retry_after_then_succeeds() {
    let server = MockServer::start_async().await;
    let mut throttle = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/lol/match/v5/matches/NA1_1");
            then.status(429).header("Retry-After", "2");
        })
        .await;

    let client = Arc::new(client_for(&server));
    let fetching = {
        let client = client.clone();
        tokio::spawn(async move { client.get_match("NA1_1").await })
    };

    // Wait for the first attempt to be throttled, then swap in a success
    // while the client sits out its 2 second backoff.
    let started = Instant::now();
    while throttle.hits_async().await == 0 {
        assert!(started.elapsed() < Duration::from_secs(5), "no request seen");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    throttle.delete_async().await;
    let success = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/lol/match/v5/matches/NA1_1");
            then.status(200)
                .json_body(serde_json::json!({ "info": { "gameDuration": 1800 } }));
        })
        .await;

    let detail = fetching.await.unwrap().unwrap();

    assert!(
        started.elapsed() >= Duration::from_secs(2),
        "retry happened before the Retry-After window"
    );
    success.assert_hits_async(1).await;
    assert_eq!(detail.info.unwrap().game_duration, Some(1800));
}

#[tokio::test]
async fn persistent_429_exhausts_the_retry_budget() {
    let server = MockServer::start_async().await;
    // No Retry-After header: the 1 second default applies between attempts.
    let throttle = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/lol/match/v5/matches/");
            then.status(429);
        })
        .await;

    let client = client_for(&server);
    let started = Instant::now();
    let err = client.get_match("NA1_1").await.unwrap_err();

    assert!(matches!(err, ApiError::RateLimitExceeded { attempts: 3 }));
    // Two backoffs happened, none after the final attempt.
    assert!(started.elapsed() >= Duration::from_secs(2));
    throttle.assert_hits_async(3).await;
}

#[tokio::test]
async fn match_ids_request_carries_the_count() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v5/matches/by-puuid/puuid-1/ids")
                .query_param("count", "40");
            then.status(200).json_body(serde_json::json!(["m1", "m2"]));
        })
        .await;

    let client = client_for(&server);
    let ids = client.get_match_ids("puuid-1", 40).await.unwrap();

    mock.assert_async().await;
    assert_eq!(ids, vec!["m1", "m2"]);
}
