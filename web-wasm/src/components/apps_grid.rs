//! アプリグリッドコンポーネント

use leptos::prelude::*;
use crate::app::CatalogContext;
use super::app_card::AppCard;

#[component]
pub fn AppsGrid() -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();

    view! {
        <div class="apps-grid">
            <For
                each=move || ctx.0.with(|s| s.paged_apps())
                key=|app| app.app_id.clone()
                children=move |app| view! { <AppCard app=app /> }
            />
        </div>
    }
}
