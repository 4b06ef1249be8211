//! カタログ画面の状態
//!
//! 検索文字列・ページ番号・選択中アプリ・最近表示したアプリを保持し、
//! 絞り込み結果やページングは都度 [`crate::utils`] から導出する。
//! ストレージは引数で注入する（グローバル状態を持たない）。

use crate::error::{Error, Result};
use crate::storage::KeyValueStorage;
use crate::types::App;
use crate::utils::{
    calculate_max_page, create_apps_by_id_index, filter_apps_by_search, get_apps_from_storage,
    paginate_apps, update_last_selected_apps, write_apps_to_storage, DEFAULT_PAGE_SIZE,
    DEFAULT_RECENT_LIMIT, LAST_SELECTED_APPS_KEY,
};
use std::collections::HashMap;

/// ページ送りコントロールの表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub max_page: usize,
    /// 「前へ」を無効化（1ページ目）
    pub prev_disabled: bool,
    /// 「次へ」を無効化（最終ページ）
    pub next_disabled: bool,
    /// 1..=max_page
    pub pages: Vec<usize>,
}

/// カタログ閲覧の状態
#[derive(Debug, Clone)]
pub struct CatalogState {
    apps: Vec<App>,
    apps_by_id: HashMap<String, App>,
    is_loading: bool,
    search: String,
    page: usize,
    selected: Option<App>,
    modal_open: bool,
    last_selected: Vec<App>,
    page_size: usize,
    recent_limit: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// 読み込み中の空状態（12件/ページ、最近表示3件）
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_PAGE_SIZE, DEFAULT_RECENT_LIMIT)
    }

    pub fn with_limits(page_size: usize, recent_limit: usize) -> Self {
        Self {
            apps: Vec::new(),
            apps_by_id: HashMap::new(),
            is_loading: true,
            search: String::new(),
            page: 1,
            selected: None,
            modal_open: false,
            last_selected: Vec::new(),
            page_size: page_size.max(1),
            recent_limit,
        }
    }

    /// 取得したアプリ一覧を反映し、最近表示したアプリをストレージから復元する
    pub fn load_apps(&mut self, apps: Vec<App>, storage: Option<&dyn KeyValueStorage>) {
        self.apps_by_id = create_apps_by_id_index(&apps);
        self.apps = apps;
        self.is_loading = false;

        let mut restored = get_apps_from_storage(&self.apps_by_id, storage, LAST_SELECTED_APPS_KEY);
        restored.truncate(self.recent_limit);
        self.last_selected = restored;
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected(&self) -> Option<&App> {
        self.selected.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open && self.selected.is_some()
    }

    /// 最近表示したアプリ（新しい順）
    pub fn last_selected(&self) -> &[App] {
        &self.last_selected
    }

    pub fn get_app(&self, app_id: &str) -> Option<&App> {
        self.apps_by_id.get(app_id)
    }

    /// 検索文字列を変更し、1ページ目に戻す
    pub fn handle_search(&mut self, value: &str) {
        self.search = value.to_string();
        self.page = 1;
    }

    pub fn filtered_apps(&self) -> Vec<App> {
        filter_apps_by_search(&self.apps, &self.search)
    }

    pub fn max_page(&self) -> usize {
        calculate_max_page(self.filtered_apps().len(), self.page_size)
    }

    /// 現在ページのアプリ
    pub fn paged_apps(&self) -> Vec<App> {
        paginate_apps(&self.filtered_apps(), self.page, self.page_size)
    }

    /// ページ番号を `[1, max_page]` に丸めて設定
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.max_page());
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.max_page());
    }

    pub fn page_controls(&self) -> PageControls {
        let max_page = self.max_page();
        PageControls {
            current: self.page,
            max_page,
            prev_disabled: self.page == 1,
            next_disabled: self.page == max_page,
            pages: (1..=max_page).collect(),
        }
    }

    /// アプリを選択してモーダルを開き、最近表示したアプリを更新・保存する
    ///
    /// ストレージへの書き込みに失敗しても画面上の状態は更新済み。
    pub fn select_app(
        &mut self,
        app: &App,
        storage: Option<&mut dyn KeyValueStorage>,
    ) -> Result<()> {
        self.selected = Some(app.clone());
        self.modal_open = true;
        self.last_selected = update_last_selected_apps(app, &self.last_selected, self.recent_limit);

        match storage {
            Some(storage) => {
                write_apps_to_storage(&self.last_selected, storage, LAST_SELECTED_APPS_KEY)
            }
            None => Ok(()),
        }
    }

    /// IDでアプリを選択
    pub fn select_app_by_id(
        &mut self,
        app_id: &str,
        storage: Option<&mut dyn KeyValueStorage>,
    ) -> Result<()> {
        let app = self
            .apps_by_id
            .get(app_id)
            .cloned()
            .ok_or_else(|| Error::UnknownApp(app_id.to_string()))?;
        self.select_app(&app, storage)
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}
