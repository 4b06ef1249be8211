//! カタログ取得テスト
//!
//! ローカルファイルと使い捨てのHTTPサーバーからの取得を検証

use app_catalog::error::CatalogError;
use app_catalog::fetcher::{fetch_apps, load_catalog, CatalogSource};
use std::time::Duration;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_secs(5);

const CATALOG_JSON: &str = r##"[
    {"app_id": "slack", "name": "Slack", "icon": "slack.png", "color": "#4A154B", "link": "https://slack.com"},
    {"app_id": "trello", "name": "Trello", "icon": "trello.png", "color": "#0079BF", "link": "https://trello.com", "extra": 1}
]"##;

/// 1回だけ応答するHTTPサーバーを起動し、URLを返す
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    // ローカル接続にプロキシを使わない
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/ferramentas_search.json", addr)
}

/// ローカルファイルから取得
#[tokio::test]
async fn test_fetch_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("apps.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();

    let apps = fetch_apps(&CatalogSource::File(path), TIMEOUT).await.expect("取得失敗");
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].app_id, "slack");
    assert_eq!(apps[1].color, "#0079BF");
}

/// 存在しないファイル
#[tokio::test]
async fn test_fetch_missing_file() {
    let source = CatalogSource::parse("/nonexistent/path/12345/apps.json");
    let err = fetch_apps(&source, TIMEOUT).await.unwrap_err();

    assert!(matches!(err, CatalogError::SourceNotFound(_)));
}

/// 配列でないJSON
#[tokio::test]
async fn test_fetch_invalid_json_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("apps.json");
    std::fs::write(&path, r#"{"apps": []}"#).unwrap();

    let err = fetch_apps(&CatalogSource::File(path), TIMEOUT).await.unwrap_err();
    assert!(matches!(err, CatalogError::JsonParse(_)));
}

/// HTTPで取得
#[tokio::test]
async fn test_fetch_from_http() {
    let url = serve_once("200 OK", CATALOG_JSON).await;

    let apps = fetch_apps(&CatalogSource::parse(&url), TIMEOUT).await.expect("取得失敗");
    let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Slack", "Trello"]);
}

/// HTTPエラーステータス
#[tokio::test]
async fn test_fetch_http_error_status() {
    let url = serve_once("500 Internal Server Error", "oops").await;

    let err = fetch_apps(&CatalogSource::parse(&url), TIMEOUT).await.unwrap_err();
    assert!(matches!(err, CatalogError::HttpStatus { status: 500, .. }));
}

/// 取得失敗は空のカタログになる
#[tokio::test]
async fn test_load_catalog_failure_is_empty() {
    let url = serve_once("404 Not Found", "").await;

    let apps = load_catalog(&CatalogSource::parse(&url), TIMEOUT, false).await;
    assert!(apps.is_empty());

    let apps = load_catalog(&CatalogSource::parse("/nonexistent/apps.json"), TIMEOUT, false).await;
    assert!(apps.is_empty());
}
