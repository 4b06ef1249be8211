//! カタログの型定義
//!
//! リモートJSON（アプリ配列）の1要素を表す。未知のフィールドは無視する。

use serde::{Deserialize, Serialize};

/// 連携アプリ1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// 一意なID（セッションをまたいで不変）
    pub app_id: String,

    /// 表示名（検索キー）
    pub name: String,

    /// アイコン画像のURL
    #[serde(default)]
    pub icon: String,

    /// 背景色（例: "#4A154B"）
    #[serde(default)]
    pub color: String,

    /// 外部リンク
    #[serde(default)]
    pub link: String,
}
