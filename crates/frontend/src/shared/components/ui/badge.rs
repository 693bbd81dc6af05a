use leptos::prelude::*;

/// Badge of a list row (status, role, channel)
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = match variant.get().as_deref().unwrap_or("neutral") {
            "primary" => "badge--primary",
            "success" => "badge--success",
            "warning" => "badge--warning",
            "error" => "badge--error",
            _ => "badge--neutral",
        };
        format!("badge {}", variant)
    };

    view! { <span class=class>{children()}</span> }
}
