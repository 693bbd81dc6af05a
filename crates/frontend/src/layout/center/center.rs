use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{render_page_content, DEFAULT_PAGE_KEY};
use leptos::prelude::*;

/// Content area: the open page, one at a time.
///
/// Switching pages remounts the list, so every list starts from its own
/// fresh state.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let active_key = Memo::new(move |_| {
        ctx.active
            .get()
            .unwrap_or_else(|| DEFAULT_PAGE_KEY.to_string())
    });

    view! {
        <main data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || render_page_content(&active_key.get())}
        </main>
    }
}
