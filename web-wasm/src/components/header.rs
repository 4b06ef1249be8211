//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"App Catalog - 連携アプリ一覧"</h1>
        </header>
    }
}
