pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure (right-to-left):
/// ```text
/// +--------------------------------+
/// |           TopHeader            |
/// +--------------------------------+
/// |      Content       |  Sidebar  |
/// |      (Center)      |  (Left)   |
/// +--------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout" dir="rtl">
            <TopHeader />

            <div class="app-body">
                // Sidebar - uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
