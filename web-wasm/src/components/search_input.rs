//! 検索入力コンポーネント

use leptos::prelude::*;
use crate::app::CatalogContext;

#[component]
pub fn SearchInput() -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();

    view! {
        <label class="input search-input">
            <input
                type="search"
                placeholder="アプリを検索"
                prop:value=move || ctx.0.with(|s| s.search().to_string())
                on:input=move |ev| {
                    // 入力のたびに1ページ目へ戻る
                    ctx.search(event_target_value(&ev));
                }
            />
        </label>
    }
}
