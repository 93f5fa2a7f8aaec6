//! Self-update check against a mocked releases API

use mockito::Server;

use ai_tool_manager::version::SelfUpdateChecker;
use ai_tool_manager::version::error::UpdateCheckError;

async fn release_server(tag: &str) -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/xiaoxu123195/atm/releases/latest")
        .match_header("accept", "application/vnd.github+json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"tag_name": "{tag}"}}"#))
        .create_async()
        .await;
    (server, mock)
}

#[tokio::test]
async fn newer_release_is_reported() {
    let (server, mock) = release_server("v1.0.1").await;

    let checker = SelfUpdateChecker::with_api_base_url(
        "1.0.0",
        "https://github.com/xiaoxu123195/atm",
        &server.url(),
    );
    let info = checker.check_for_updates().await;

    mock.assert_async().await;
    assert!(info.error.is_none());
    assert!(info.has_update);
    assert_eq!(info.current_version, "1.0.0");
    assert_eq!(info.latest_version, "1.0.1");
    assert_eq!(info.repository_url, "https://github.com/xiaoxu123195/atm");
    assert_eq!(info.release_url, None);
}

#[tokio::test]
async fn same_release_is_not_an_update() {
    let (server, mock) = release_server("v1.0.0").await;

    let checker = SelfUpdateChecker::with_api_base_url(
        "1.0.0",
        "https://github.com/xiaoxu123195/atm",
        &server.url(),
    );
    let info = checker.check_for_updates().await;

    mock.assert_async().await;
    assert!(info.error.is_none());
    assert!(!info.has_update);
    assert_eq!(info.latest_version, "1.0.0");
}

#[tokio::test]
async fn older_release_is_not_an_update() {
    let (server, _mock) = release_server("0.9.12").await;

    let checker = SelfUpdateChecker::with_api_base_url(
        "1.0.0",
        "https://github.com/xiaoxu123195/atm",
        &server.url(),
    );
    let info = checker.check_for_updates().await;

    assert!(!info.has_update);
    assert_eq!(info.latest_version, "0.9.12");
}

#[tokio::test]
async fn malformed_repository_url_is_reported_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let checker = SelfUpdateChecker::with_api_base_url("1.0.0", "not-a-url", &server.url());
    let info = checker.check_for_updates().await;

    mock.assert_async().await;
    assert!(!info.has_update);
    assert!(matches!(
        info.error,
        Some(UpdateCheckError::InvalidRepositoryUrl(url)) if url == "not-a-url"
    ));
}

#[tokio::test]
async fn unreachable_api_is_reported_as_network_error() {
    // Nothing listens on port 9 of localhost
    let checker = SelfUpdateChecker::with_api_base_url(
        "1.0.0",
        "https://github.com/xiaoxu123195/atm",
        "http://127.0.0.1:9",
    );
    let info = checker.check_for_updates().await;

    assert!(!info.has_update);
    assert!(matches!(info.error, Some(UpdateCheckError::Network(_))));
}
