//! End-to-end pipeline tests
//!
//! Exercises check, explanation and report writing together against mock
//! HTTP servers

use site_pulse::cli::commands::run_check;
use site_pulse::config::{CheckConfig, Config, ExplainerConfig, GlobalConfig, ReportConfig};
use site_pulse::explain::{FALLBACK_EXPLANATION, NO_ISSUES_EXPLANATION};
use site_pulse::health::CheckStatus;
use std::collections::HashMap;
use tempfile::TempDir;

fn test_config(target_url: &str, dir: &TempDir, explainer: ExplainerConfig) -> Config {
    Config {
        global: GlobalConfig::default(),
        check: CheckConfig {
            url: target_url.to_string(),
            timeout_seconds: 2,
            headers: HashMap::new(),
        },
        explainer,
        report: ReportConfig {
            markdown_path: dir.path().join("report.md"),
            html_path: dir.path().join("report.html"),
            title: "Website Health Report".to_string(),
        },
    }
}

fn explainer_disabled() -> ExplainerConfig {
    ExplainerConfig {
        api_key: None,
        ..Default::default()
    }
}

fn explainer_at(endpoint: &str) -> ExplainerConfig {
    ExplainerConfig {
        api_key: Some("sk-test".to_string()),
        endpoint: endpoint.to_string(),
        timeout_seconds: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn healthy_site_produces_ok_report_without_api_call() {
    let mut target = mockito::Server::new_async().await;
    target.mock("GET", "/").with_status(200).create_async().await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&target.url(), &dir, explainer_disabled());

    let result = run_check(&config).await.unwrap();

    assert_eq!(result.status, CheckStatus::Ok);
    assert_eq!(result.http_code, Some(200));
    assert_eq!(result.explanation, NO_ISSUES_EXPLANATION);

    let markdown = std::fs::read_to_string(config.report.markdown_path).unwrap();
    assert!(markdown.contains("Status: OK"));
    assert!(markdown.contains(NO_ISSUES_EXPLANATION));
    assert!(config.report.html_path.exists());
}

#[tokio::test]
async fn missing_page_asks_the_explainer() {
    let mut target = mockito::Server::new_async().await;
    target.mock("GET", "/").with_status(404).create_async().await;

    let mut api = mockito::Server::new_async().await;
    let completion_mock = api
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"The page is missing."}}]}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &target.url(),
        &dir,
        explainer_at(&format!("{}/v1/chat/completions", api.url())),
    );

    let result = run_check(&config).await.unwrap();

    completion_mock.assert_async().await;
    assert_eq!(result.status, CheckStatus::Warn);
    assert_eq!(result.http_code, Some(404));
    assert_eq!(result.explanation, "The page is missing.");

    let markdown = std::fs::read_to_string(config.report.markdown_path).unwrap();
    assert!(markdown.contains("Status: WARN"));
    assert!(markdown.contains("HTTP Code: 404"));
    assert!(markdown.contains("The page is missing."));
}

#[tokio::test]
async fn unreachable_site_with_unreachable_api_still_writes_report() {
    // Nothing listens on either port
    let dir = TempDir::new().unwrap();
    let config = test_config(
        "http://127.0.0.1:1",
        &dir,
        explainer_at("http://127.0.0.1:1/v1/chat/completions"),
    );

    let result = run_check(&config).await.unwrap();

    assert_eq!(result.status, CheckStatus::Fail);
    assert!(result.http_code.is_none());
    assert!(result.error_message.is_some());
    assert_eq!(result.explanation, FALLBACK_EXPLANATION);

    let markdown = std::fs::read_to_string(config.report.markdown_path).unwrap();
    assert!(markdown.contains("Status: FAIL"));
    assert!(markdown.contains("HTTP Code: -"));
    assert!(config.report.html_path.exists());
}

#[tokio::test]
async fn degraded_site_without_api_key_uses_fallback() {
    let mut target = mockito::Server::new_async().await;
    target.mock("GET", "/").with_status(500).create_async().await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&target.url(), &dir, explainer_disabled());

    let result = run_check(&config).await.unwrap();

    assert_eq!(result.status, CheckStatus::Warn);
    assert_eq!(result.explanation, FALLBACK_EXPLANATION);

    let markdown = std::fs::read_to_string(config.report.markdown_path).unwrap();
    assert!(markdown.contains("Status: WARN"));
    assert!(markdown.contains("HTTP Code: 500"));
    assert!(markdown.contains(FALLBACK_EXPLANATION));
}

#[tokio::test]
async fn api_error_is_swallowed_and_reported_as_fallback() {
    let mut target = mockito::Server::new_async().await;
    target.mock("GET", "/").with_status(503).create_async().await;

    let mut api = mockito::Server::new_async().await;
    api.mock("POST", "/v1/chat/completions")
        .with_status(429)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        &target.url(),
        &dir,
        explainer_at(&format!("{}/v1/chat/completions", api.url())),
    );

    let result = run_check(&config).await.unwrap();

    assert_eq!(result.status, CheckStatus::Warn);
    assert_eq!(result.explanation, FALLBACK_EXPLANATION);
    assert!(config.report.markdown_path.exists());
}
