//! Analyzer endpoint tests with in-process origin and evaluator stubs.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use axum_test::TestServer;
use seoscope_core::{EvaluatorConfig, FetchConfig};
use seoscope_server::{AppState, create_app};
use serde_json::{Value, json};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).unwrap()
}

/// Serves a router on an ephemeral local port and returns its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn state_without_evaluator() -> AppState {
    AppState {
        fetch: FetchConfig::default(),
        evaluator: EvaluatorConfig::default(),
    }
}

#[tokio::test]
async fn test_health_returns_ok() {
    let server = TestServer::new(create_app(state_without_evaluator())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_missing_url_param_is_rejected() {
    let server = TestServer::new(create_app(state_without_evaluator())).unwrap();

    let response = server.get("/analyzer").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_url_returns_400_with_detail() {
    let server = TestServer::new(create_app(state_without_evaluator())).unwrap();

    let response = server.get("/analyzer").add_query_param("url", "not-a-url").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("Invalid URL"));
}

#[tokio::test]
async fn test_end_to_end_known_page() {
    let page = fixture("known_page.html");
    let origin = serve(Router::new().route(
        "/",
        get(move || {
            let page = page.clone();
            async move { axum::response::Html(page) }
        }),
    ))
    .await;

    let server = TestServer::new(create_app(state_without_evaluator())).unwrap();
    let url = format!("http://{origin}/");

    let response = server.get("/analyzer").add_query_param("url", &url).await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["url"], url);
    assert_eq!(body["word_count"], 18);
    assert_eq!(body["keywords"][0]["word"], "coffee");
    assert_eq!(body["keywords"][0]["count"], 4);
    assert_eq!(body["keywords"][1]["word"], "brewing");
    assert_eq!(body["keywords"][1]["count"], 3);
    assert_eq!(body["meta_tags"]["title"], "Coffee Brewing Basics");

    // short content plus the plain-http origin
    let issues: Vec<&str> = body["seo_issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["issue"].as_str().unwrap())
        .collect();
    assert_eq!(issues, vec!["Content length is too short", "Not using HTTPS"]);

    // 100 - 10 - 10 (High issues) - 10 (word count < 300)
    assert_eq!(body["seo_score"], 70);

    // no API key configured: the evaluation degrades, the request does not
    assert_eq!(body["content_evaluation"]["error"], "Failed to evaluate content quality");
}

#[tokio::test]
async fn test_evaluator_verdict_passes_through() {
    let page = fixture("wordy_page.html");
    let verdict = json!({
        "choices": [{
            "message": {
                "content": "{\"readability\": 8, \"relevance\": 7, \"engagement\": 6, \"overall_score\": 74, \"suggestions\": [\"vary the sentences\"]}"
            }
        }]
    });
    let origin = serve(
        Router::new()
            .route(
                "/",
                get(move || {
                    let page = page.clone();
                    async move { axum::response::Html(page) }
                }),
            )
            .route(
                "/v1/chat/completions",
                post(move || {
                    let verdict = verdict.clone();
                    async move { Json(verdict) }
                }),
            ),
    )
    .await;

    let state = AppState {
        fetch: FetchConfig::default(),
        evaluator: EvaluatorConfig {
            api_key: Some("test-key".to_string()),
            endpoint: format!("http://{origin}/v1/chat/completions"),
            ..Default::default()
        },
    };
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server
        .get("/analyzer")
        .add_query_param("url", format!("http://{origin}/"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["content_evaluation"]["overall_score"], 74);
    assert_eq!(body["content_evaluation"]["readability"], 8);
}

#[tokio::test]
async fn test_origin_error_status_fails_request() {
    let origin = serve(Router::new().route(
        "/",
        get(|| async { (StatusCode::NOT_FOUND, "gone") }),
    ))
    .await;

    let server = TestServer::new(create_app(state_without_evaluator())).unwrap();

    let response = server
        .get("/analyzer")
        .add_query_param("url", format!("http://{origin}/"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_unreachable_origin_fails_request() {
    let server = TestServer::new(create_app(state_without_evaluator())).unwrap();

    let response = server
        .get("/analyzer")
        .add_query_param("url", "http://127.0.0.1:1/")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].as_str().is_some());
}
