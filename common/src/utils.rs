//! カタログ操作ユーティリティ
//!
//! 検索・ページング・最近表示したアプリの更新など、状態を持たない純粋関数群。

use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::types::App;
use std::collections::HashMap;

/// 1ページあたりの表示件数
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// 最近表示したアプリの最大件数
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// 最近表示したアプリIDを保存するストレージキー
pub const LAST_SELECTED_APPS_KEY: &str = "lastSelectedApps";

/// 名前の部分一致（大文字小文字を区別しない）で絞り込む
///
/// 空文字列なら全件をそのままの順序で返す。
pub fn filter_apps_by_search(apps: &[App], search: &str) -> Vec<App> {
    let normalized = search.to_lowercase();
    apps.iter()
        .filter(|app| app.name.to_lowercase().contains(&normalized))
        .cloned()
        .collect()
}

/// `page`（1始まり）の範囲 `[(page-1)*size, page*size)` を切り出す
///
/// 範囲外のページは空を返す。ページ番号の検証は呼び出し側の責任。
pub fn paginate_apps(apps: &[App], page: usize, page_size: usize) -> Vec<App> {
    let Some(start) = page.checked_sub(1).map(|p| p.saturating_mul(page_size)) else {
        return Vec::new();
    };
    if start >= apps.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(apps.len());
    apps[start..end].to_vec()
}

/// 総ページ数（最低1）
pub fn calculate_max_page(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// 選択したアプリを先頭に移動し、重複を除いて `max_items` 件に切り詰める
pub fn update_last_selected_apps(
    current: &App,
    last_selected: &[App],
    max_items: usize,
) -> Vec<App> {
    std::iter::once(current)
        .chain(last_selected.iter().filter(|a| a.app_id != current.app_id))
        .take(max_items)
        .cloned()
        .collect()
}

/// app_id → App のインデックスを作成（IDが重複した場合は後勝ち）
pub fn create_apps_by_id_index(apps: &[App]) -> HashMap<String, App> {
    apps.iter()
        .map(|app| (app.app_id.clone(), app.clone()))
        .collect()
}

/// ストレージに保存されたID配列からアプリ一覧を復元する
///
/// - ストレージが使えない（`None`）、値がない、JSONが壊れている場合は空
/// - インデックスに存在しないIDは黙って捨てる
pub fn get_apps_from_storage(
    apps_by_id: &HashMap<String, App>,
    storage: Option<&dyn KeyValueStorage>,
    storage_key: &str,
) -> Vec<App> {
    let Some(storage) = storage else {
        return Vec::new();
    };
    let Some(raw) = storage.get_item(storage_key) else {
        return Vec::new();
    };

    let stored_ids = match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Array(values)) => values,
        _ => return Vec::new(),
    };

    stored_ids
        .iter()
        .filter_map(|v| v.as_str())
        .filter_map(|id| apps_by_id.get(id).cloned())
        .collect()
}

/// アプリ一覧をID配列（JSON）としてストレージに書き込む
pub fn write_apps_to_storage(
    apps: &[App],
    storage: &mut dyn KeyValueStorage,
    storage_key: &str,
) -> Result<()> {
    let ids: Vec<&str> = apps.iter().map(|a| a.app_id.as_str()).collect();
    let json = serde_json::to_string(&ids)?;
    storage.set_item(storage_key, &json)
}
