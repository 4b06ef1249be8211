//! アプリカードコンポーネント

use leptos::prelude::*;
use app_catalog_common::App as CatalogApp;
use crate::app::CatalogContext;

#[component]
pub fn AppCard(app: CatalogApp) -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();
    let figure_style = format!("background-color: {}", app.color);
    let name = app.name.clone();
    let icon = app.icon.clone();

    view! {
        <a class="card" on:click=move |_| ctx.select(app.clone())>
            <figure style=figure_style>
                <img src=icon alt=name.clone() width="64" height="64" />
            </figure>
            <div class="card-body">
                <h4>{name}</h4>
            </div>
        </a>
    }
}
