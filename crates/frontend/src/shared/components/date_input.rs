use crate::shared::general_list::date_range::{format_date_input, parse_date_input};
use chrono::NaiveDate;
use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays the date in its own locale; the value is always yyyy-mm-dd
#[component]
pub fn DateInput(
    /// Label shown before the picker
    #[prop(into)]
    label: String,
    /// Current date, None when the field is empty
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Callback when the date changes; None when cleared
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 140px;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <label class="date-input">
            <span class="date-input__label">{label}</span>
            <input
                type="date"
                prop:value=move || format_date_input(value.get())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let date = parse_date_input(&raw);
                    if date.is_none() && !raw.is_empty() {
                        log::warn!("Unparsable date input: {}", raw);
                    }
                    on_change.run(date);
                }
                style=final_style
            />
        </label>
    }
}
