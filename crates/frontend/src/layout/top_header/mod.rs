//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - User info and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header" dir="rtl">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "بستن منو" } else { "نمایش منو" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"پنل مدیریت آکادمی"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .and_then(|u| u.display_name())
                            .unwrap_or_else(|| "مدیر".to_string())}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| logout(set_auth_state)
                    title="خروج"
                >
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
