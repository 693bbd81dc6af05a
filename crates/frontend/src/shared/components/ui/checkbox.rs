use leptos::prelude::*;

/// Checkbox of a filter form. Unchecked means "no filter".
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label class=move || {
            if checked.get() {
                "form__checkbox-wrapper form__checkbox-wrapper--checked"
            } else {
                "form__checkbox-wrapper"
            }
        }>
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
