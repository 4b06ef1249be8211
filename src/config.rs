use crate::error::{CatalogError, Result};
use app_catalog_common::{DEFAULT_PAGE_SIZE, DEFAULT_RECENT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_URL: &str = "https://pluga.co/ferramentas_search.json";

/// カタログ取得元を上書きする環境変数
pub const SOURCE_ENV_VAR: &str = "APP_CATALOG_SOURCE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_url: String,
    pub page_size: usize,
    pub recent_limit: usize,
    pub timeout_seconds: u64,
    pub storage_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            recent_limit: DEFAULT_RECENT_LIMIT,
            timeout_seconds: 30,
            storage_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("app-catalog"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 取得元の決定: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_source(&self, cli_source: Option<&str>) -> String {
        if let Some(source) = cli_source {
            return source.to_string();
        }

        // 環境変数を優先
        if let Ok(source) = std::env::var(SOURCE_ENV_VAR) {
            if !source.trim().is_empty() {
                return source;
            }
        }

        self.source_url.clone()
    }

    /// ストレージファイルの決定: 引数 > 設定ファイル > デフォルト
    pub fn resolve_storage_path(&self, cli_storage: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_storage {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage_path {
            return Ok(path.clone());
        }
        Ok(Self::config_dir()?.join("storage.json"))
    }

    pub fn set_source_url(&mut self, url: String) {
        self.source_url = url;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(CatalogError::Config("ページサイズは1以上を指定してください".into()));
        }
        self.page_size = page_size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.recent_limit, 3);
    }

    #[test]
    fn test_cli_source_wins() {
        let config = Config::default();
        assert_eq!(config.resolve_source(Some("apps.json")), "apps.json");
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"page_size": 6}"#).unwrap();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_set_page_size_rejects_zero() {
        let mut config = Config::default();
        assert!(config.set_page_size(0).is_err());
        assert!(config.set_page_size(8).is_ok());
        assert_eq!(config.page_size, 8);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_source_url("http://localhost/apps.json".into());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.source_url, "http://localhost/apps.json");
    }

    #[test]
    fn test_resolve_storage_path_prefers_cli() {
        let config = Config {
            storage_path: Some(PathBuf::from("/tmp/from-config.json")),
            ..Default::default()
        };
        let path = config.resolve_storage_path(Some(Path::new("/tmp/cli.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/cli.json"));

        let path = config.resolve_storage_path(None).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-config.json"));
    }
}
