//! 連携アプリカタログ CLI
//!
//! カタログ取得・ファイルストレージ・端末表示・対話閲覧。
//! 検索やページングなどの共通ロジックは `app_catalog_common` にある。

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod render;
pub mod storage;
