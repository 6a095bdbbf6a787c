mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Duration;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use common::*;
use scrobblesnap::{
    server::{AppState, build_router},
    types::Window,
    utils,
};

/// Charts covering the last six years up to next week, relative to the real
/// current date, since the user page always works from today.
fn current_charts() -> Value {
    weekly_chart_list(utils::today() - Duration::days(7 * 320), 322)
}

fn setup_app(api: FakeLastFm) -> axum::Router {
    build_router(AppState::new(api, Window::EXTENDED.to_vec()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

#[tokio::test]
async fn test_home() {
    let app = setup_app(FakeLastFm::fixtures());

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("Basic Page"));
    assert!(body.contains("name=\"username\""));
}

#[tokio::test]
async fn test_home_post_redirects_to_user_page() {
    let app = setup_app(FakeLastFm::fixtures());

    let response = app
        .oneshot(post_form("/", "username=J_Roche"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/J_Roche/");
}

#[tokio::test]
async fn test_home_post_blank_username() {
    let app = setup_app(FakeLastFm::fixtures());

    let response = app.oneshot(post_form("/", "username=+")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response.into_body()).await.contains("Basic Page"));
}

#[tokio::test]
async fn test_user_path_without_slash_redirects() {
    let app = setup_app(FakeLastFm::fixtures());

    let response = app.oneshot(get("/J_Roche")).await.unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/J_Roche/");
}

#[tokio::test]
async fn test_health() {
    let app = setup_app(FakeLastFm::fixtures());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_user_page() {
    let app = setup_app(FakeLastFm::new(current_charts(), albums_fixture()));

    let response = app.oneshot(get("/J_Roche/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("<h1>J_Roche</h1>"));
    for window in Window::EXTENDED {
        assert!(body.contains(window.title()));
    }
    // Escaped album name from the fixture
    assert!(body.contains("Carrie &amp; Lowell"));
    // Eleventh album is past the top ten
    assert!(!body.contains("Goon"));
}

#[tokio::test]
async fn test_user_page_user_not_found() {
    let app = setup_app(FakeLastFm::new(
        error_payload(6, "User not found"),
        albums_fixture(),
    ));

    let response = app.oneshot(get("/nobody_here/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_page_upstream_error_inline() {
    let app = setup_app(FakeLastFm::new(
        current_charts(),
        error_payload(8, "Some LastFM error"),
    ));

    let response = app.oneshot(get("/J_Roche/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("Some LastFM error"));
    assert!(body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_user_page_no_chart_for_range_inline() {
    // Account younger than six months
    let app = setup_app(FakeLastFm::new(
        weekly_chart_list(utils::today() - Duration::days(28), 6),
        albums_fixture(),
    ));

    let response = app.oneshot(get("/J_Roche/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        body_text(response.into_body())
            .await
            .contains("No chart for that range")
    );
}

#[tokio::test]
async fn test_user_page_escapes_username() {
    let app = setup_app(FakeLastFm::new(
        error_payload(8, "Some LastFM error"),
        albums_fixture(),
    ));

    let response = app.oneshot(get("/%3Cb%3E/")).await.unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("&lt;b&gt;"));
    assert!(!body.contains("<h1><b>"));
}
