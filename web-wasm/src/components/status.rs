//! 読み込み中・検索結果なしの表示

use leptos::prelude::*;
use crate::app::CatalogContext;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="status">
            <span class="loading loading-spinner"></span>
        </div>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();

    view! {
        <div class="status">
            <p>
                {move || format!(
                    "「{}」に一致するアプリが見つかりません。",
                    ctx.0.with(|s| s.search().to_string()),
                )}
            </p>
        </div>
    }
}
