//! 詳細モーダルコンポーネント
//!
//! 選択中アプリの詳細と、最近表示したアプリ（新しい順）を表示する。

use leptos::prelude::*;
use app_catalog_common::App as CatalogApp;
use crate::app::CatalogContext;
use super::app_card::AppCard;

#[component]
pub fn AppModal() -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();
    let selected = Memo::new(move |_| ctx.0.with(|s| s.selected().cloned()));
    let is_open = move || ctx.0.with(|s| s.is_modal_open());

    view! {
        <div class="modal" class:modal-open=is_open>
            {move || selected.get().map(|app| view! { <AppDetail app=app /> })}
            <div class="modal-backdrop" on:click=move |_| ctx.close_modal()></div>
        </div>
    }
}

#[component]
fn AppDetail(app: CatalogApp) -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();
    let figure_style = format!("background-color: {}", app.color);

    view! {
        <div class="modal-box">
            <div class="app-detail">
                <figure class="app-detail-icon" style=figure_style>
                    <img src=app.icon.clone() alt=app.name.clone() width="64" height="64" />
                </figure>
                <div>
                    <h2>{app.name.clone()}</h2>
                    <a href=app.link.clone() target="_blank" rel="noreferrer" class="btn btn-primary">
                        "アクセス"
                    </a>
                </div>
            </div>
            <h2 class="recent-title">"最近表示したアプリ"</h2>
            <div class="recent-grid">
                <For
                    each=move || ctx.0.with(|s| s.last_selected().to_vec())
                    key=|app| app.app_id.clone()
                    children=move |app| view! { <AppCard app=app /> }
                />
            </div>
        </div>
    }
}
