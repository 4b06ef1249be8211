use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログ取得エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("カタログ取得に失敗しました (HTTP {status}): {url}")]
    HttpStatus { status: u16, url: String },

    #[error("カタログファイルが見つかりません: {0}")]
    SourceNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("アプリが見つかりません: {0}。`app-catalog list --search` でIDを確認してください")]
    AppNotFound(String),

    #[error("入力エラー: {0}")]
    Interactive(String),

    #[error(transparent)]
    Common(#[from] app_catalog_common::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
