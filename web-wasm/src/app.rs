//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use app_catalog_common::{App as CatalogApp, CatalogState, KeyValueStorage};
use crate::api::apps::{fetch_apps, APPS_URL};
use crate::storage::BrowserStorage;
use crate::components::{
    header::Header,
    search_input::SearchInput,
    apps_grid::AppsGrid,
    pagination::Pagination,
    app_modal::AppModal,
    status::{EmptyState, Spinner},
};

/// カタログ状態（コンテキストで共有）
#[derive(Clone, Copy)]
pub struct CatalogContext(pub RwSignal<CatalogState>);

impl CatalogContext {
    pub fn search(&self, value: String) {
        self.0.update(|state| state.handle_search(&value));
    }

    pub fn set_page(&self, page: usize) {
        self.0.update(|state| state.set_page(page));
    }

    pub fn prev_page(&self) {
        self.0.update(|state| state.prev_page());
    }

    pub fn next_page(&self) {
        self.0.update(|state| state.next_page());
    }

    /// アプリを選択してモーダルを開き、最近表示したアプリをlocalStorageに保存
    pub fn select(&self, app: CatalogApp) {
        self.0.update(|state| {
            let mut storage = BrowserStorage::open();
            let storage = storage.as_mut().map(|s| s as &mut dyn KeyValueStorage);
            if let Err(e) = state.select_app(&app, storage) {
                warn(&format!("最近表示したアプリの保存に失敗: {}", e));
            }
        });
    }

    pub fn close_modal(&self) {
        self.0.update(|state| state.close_modal());
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(CatalogState::new());
    provide_context(CatalogContext(state));

    // 起動時に1回だけ取得
    spawn_local(async move {
        let apps = match fetch_apps(APPS_URL).await {
            Ok(apps) => apps,
            Err(e) => {
                warn(&format!("カタログの取得に失敗: {:?}", e));
                Vec::new()
            }
        };
        let storage = BrowserStorage::open();
        state.update(|s| {
            s.load_apps(apps, storage.as_ref().map(|st| st as &dyn KeyValueStorage));
        });
    });

    let is_loading = move || state.with(|s| s.is_loading());
    let has_results = move || state.with(|s| !s.paged_apps().is_empty());

    view! {
        <div class="container">
            <Header />

            <SearchInput />

            <Show when=move || !is_loading() fallback=|| view! { <Spinner /> }>
                <Show when=has_results fallback=|| view! { <EmptyState /> }>
                    <AppsGrid />
                    <Pagination />
                </Show>
            </Show>
        </div>

        <AppModal />
    }
}
