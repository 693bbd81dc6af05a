use leptos::prelude::*;

/// Text input of a filter form
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Text direction; "auto" lets mixed Persian/Latin text pick its own
    #[prop(optional, into)]
    dir: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_dir = move || dir.get().unwrap_or_else(|| "auto".to_string());

    view! {
        <label class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <input
                class="form__input"
                type="text"
                dir=input_dir
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </label>
    }
}
