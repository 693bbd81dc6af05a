use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    storage::save_access_token(&response.tokens.access.token);

                    if !response.user.is_admin() {
                        log::warn!("login: user {} is not an admin", response.user.id);
                    }

                    set_auth_state.set(AuthState {
                        access_token: Some(response.tokens.access.token),
                        user_info: Some(response.user),
                    });
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message.set(Some(match e {
                        crate::shared::error::FetchError::NotAuthenticated => {
                            "ایمیل یا رمز عبور نادرست است.".to_string()
                        }
                        other => other.user_message().to_string(),
                    }));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container" dir="rtl">
            <div class="login-box">
                <h1>"پنل مدیریت آکادمی"</h1>
                <h2>"ورود به سامانه"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"ایمیل"</label>
                        <input
                            type="email"
                            id="email"
                            dir="ltr"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"رمز عبور"</label>
                        <input
                            type="password"
                            id="password"
                            dir="ltr"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "در حال ورود..." } else { "ورود" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
