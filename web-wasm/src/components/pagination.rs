//! ページ送りコンポーネント

use leptos::prelude::*;
use crate::app::CatalogContext;

#[component]
pub fn Pagination() -> impl IntoView {
    let ctx = expect_context::<CatalogContext>();
    let controls = Memo::new(move |_| ctx.0.with(|s| s.page_controls()));

    view! {
        <div class="pagination">
            <button
                class="btn"
                class:btn-disabled=move || controls.get().prev_disabled
                disabled=move || controls.get().prev_disabled
                on:click=move |_| ctx.prev_page()
            >
                "‹"
            </button>
            <For
                each=move || controls.get().pages
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class="btn"
                            class:btn-active=move || controls.get().current == page
                            on:click=move |_| ctx.set_page(page)
                        >
                            {page.to_string()}
                        </button>
                    }
                }
            />
            <button
                class="btn"
                class:btn-disabled=move || controls.get().next_disabled
                disabled=move || controls.get().next_disabled
                on:click=move |_| ctx.next_page()
            >
                "›"
            </button>
        </div>
    }
}
