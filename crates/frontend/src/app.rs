use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide ToastService for notifications
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ToastHost />
    }
}
