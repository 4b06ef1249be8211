//! カタログ取得モジュール
//!
//! HTTP(S)のURLまたはローカルJSONファイルからアプリ一覧を1回だけ取得する。
//! リトライはしない。

use crate::error::{CatalogError, Result};
use app_catalog_common::App;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// カタログの取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `http://` / `https://` で始まればURL、それ以外はファイルパス
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Remote(trimmed.to_string())
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Remote(url) => write!(f, "{}", url),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// アプリ一覧を取得（失敗はエラーとして返す）
pub async fn fetch_apps(source: &CatalogSource, timeout: Duration) -> Result<Vec<App>> {
    match source {
        CatalogSource::Remote(url) => fetch_remote(url, timeout).await,
        CatalogSource::File(path) => {
            if !path.exists() {
                return Err(CatalogError::SourceNotFound(path.display().to_string()));
            }
            let content = tokio::fs::read_to_string(path).await?;
            let apps: Vec<App> = serde_json::from_str(&content)?;
            Ok(apps)
        }
    }
}

async fn fetch_remote(url: &str, timeout: Duration) -> Result<Vec<App>> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    log::debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let apps: Vec<App> = serde_json::from_str(&body)?;
    Ok(apps)
}

/// アプリ一覧を読み込む
///
/// 取得に失敗した場合は警告ログを出して空のカタログを返す。
pub async fn load_catalog(source: &CatalogSource, timeout: Duration, show_progress: bool) -> Vec<App> {
    let spinner = show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("カタログを読み込み中... ({})", source));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = fetch_apps(source, timeout).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match result {
        Ok(apps) => {
            let duplicates = count_duplicate_ids(&apps);
            if duplicates > 0 {
                log::debug!("重複したapp_idが{}件あります（後勝ち）", duplicates);
            }
            log::info!("{}件のアプリを読み込みました: {}", apps.len(), source);
            apps
        }
        Err(e) => {
            log::warn!("カタログの取得に失敗しました: {}", e);
            Vec::new()
        }
    }
}

fn count_duplicate_ids(apps: &[App]) -> usize {
    let mut seen = HashSet::new();
    apps.iter().filter(|a| !seen.insert(a.app_id.as_str())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote_source() {
        assert_eq!(
            CatalogSource::parse("https://pluga.co/ferramentas_search.json"),
            CatalogSource::Remote("https://pluga.co/ferramentas_search.json".into())
        );
        assert!(matches!(CatalogSource::parse(" HTTP://localhost:8080/a.json "), CatalogSource::Remote(_)));
    }

    #[test]
    fn test_parse_file_source() {
        assert_eq!(
            CatalogSource::parse("./apps.json"),
            CatalogSource::File(PathBuf::from("./apps.json"))
        );
    }

    #[test]
    fn test_count_duplicate_ids() {
        let apps: Vec<App> = ["a", "b", "a", "a"]
            .iter()
            .map(|id| App { app_id: id.to_string(), ..Default::default() })
            .collect();
        assert_eq!(count_duplicate_ids(&apps), 2);
    }
}
