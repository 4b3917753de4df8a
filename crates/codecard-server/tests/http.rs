//! End-to-end tests for the HTTP surface: real listener, wiremock upstream.

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codecard_core::FetchConfig;
use codecard_fetch::{ProfileClient, ProfileFetcher};
use codecard_server::api::{build_app, AppState};

/// Starts the app on an ephemeral port, pointing both upstreams at
/// `upstream_base`, and returns the local base URL.
async fn spawn_app(upstream_base: &str) -> String {
    let client = ProfileClient::with_base_urls(
        FetchConfig::default(),
        5,
        upstream_base,
        upstream_base,
    )
    .expect("client construction should not fail");
    let state = AppState {
        fetcher: Arc::new(ProfileFetcher::new(client)),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, build_app(state))
            .await
            .expect("server task");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn health_responds_ok() {
    let base = spawn_app("http://127.0.0.1:1").await;
    let res = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn successful_fetch_relays_mapped_summary() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "alice",
            "totalSolved": 410,
            "globalRanking": 1234,
            "totalContests": 20,
            "rating": 1901,
            "badges": ["Graphs"]
        })))
        .mount(&upstream)
        .await;

    let base = spawn_app(&upstream.uri()).await;
    let res = reqwest::get(format!("{base}/api/leetcode/alice")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["solved"], 410);
    assert_eq!(body["contestRating"], 1901);
    assert_eq!(body["badges"][0], "Graphs");
}

#[tokio::test]
async fn failed_fetch_returns_500_with_placeholder_body() {
    // Nothing listens on this port; the fetch degrades to the placeholder.
    let base = spawn_app("http://127.0.0.1:1").await;
    let res = reqwest::get(format!("{base}/api/codechef/anyone"))
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["username"], "techmaster");
    assert_eq!(body["rating"], 1892);
    assert_eq!(body["division"], 2);
    assert_eq!(body["contestsParticipated"], 12);
    assert_eq!(body["problemsSolved"], 245);
    assert_eq!(body["highestRank"], 234);
}

#[tokio::test]
async fn unknown_platform_is_404() {
    let base = spawn_app("http://127.0.0.1:1").await;
    let res = reqwest::get(format!("{base}/api/topcoder/alice"))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn card_route_serves_svg_attachment() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/carol"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "data": { "content": {
                "username": "carol",
                "rating": 2011,
                "division": 1,
                "contestsParticipated": 34,
                "problemsSolved": 512,
                "highestRank": 17
            }}}
        })))
        .mount(&upstream)
        .await;

    let base = spawn_app(&upstream.uri()).await;
    let res = reqwest::get(format!("{base}/api/codechef/carol/card"))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "image/svg+xml"
    );
    assert_eq!(
        res.headers()["content-disposition"].to_str().unwrap(),
        "attachment; filename=\"codechef-profile-card.svg\""
    );

    let svg = res.text().await.unwrap();
    assert!(svg.contains("width=\"400\" height=\"500\""));
    assert!(svg.contains(">#17</text>"));
}

#[tokio::test]
async fn degraded_card_still_renders_placeholder() {
    let base = spawn_app("http://127.0.0.1:1").await;
    let res = reqwest::get(format!("{base}/api/leetcode/x/card"))
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let svg = res.text().await.unwrap();
    assert!(svg.contains(">LeetCode Report</text>"));
    assert!(svg.contains(">Dynamic Programming</text>"));
}
