/// Поле поиска списка и мелкие помощники для отображения строк
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Компонент поиска с кнопкой очистки.
///
/// Только отображает ввод; задержку перед запросом делает сам список.
#[component]
pub fn SearchInput(
    /// Текущий текст поля (до debounce)
    #[prop(into)]
    value: Signal<String>,
    /// Каждое нажатие клавиши
    #[prop(into)]
    on_input: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "جستجو...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="search"
                dir="rtl"
                placeholder=placeholder
                style=move || format!(
                    "width: 260px; padding: 6px 10px 6px 32px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || if is_filter_active() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_input.run(String::new())
                        title="پاک کردن"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Пустое значение поля показываем прочерком
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Дата из ISO-строки бэкенда, без времени
pub fn short_date(iso: &str) -> String {
    iso.get(..10).unwrap_or(iso).to_string()
}

/// Сумма в томанах с разделителями разрядов: 1250000 -> "1,250,000 تومان"
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} تومان", sign, grouped)
}
