use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{or_dash, short_date};
use contracts::domain::a008_ticket::{TicketDto, TICKET_PRIORITIES, TICKET_STATUSES};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const TICKETS: Endpoint<TicketDto> = Endpoint::new("/tickets");

pub fn ticket_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("status", "وضعیت", TICKET_STATUSES),
        FilterDeclaration::options("priority", "اولویت", TICKET_PRIORITIES),
    ]
}

fn priority_badge(priority: Option<&str>) -> (&'static str, &'static str) {
    match priority {
        Some("high") => ("error", "فوری"),
        Some("medium") => ("warning", "متوسط"),
        _ => ("neutral", "عادی"),
    }
}

/// Тикеты поддержки
#[component]
#[allow(non_snake_case)]
pub fn TicketList() -> impl IntoView {
    view! {
        <GeneralList
            query=TICKETS
            filters=ticket_filters()
            render_item=Callback::new(|ticket: TicketDto| view! { <TicketRow ticket=ticket /> }.into_any())
            title="تیکت‌های پشتیبانی"
            search_placeholder="جستجو در موضوع تیکت"
            show_date_filter=true
            empty_message="تیکتی ثبت نشده است"
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn TicketRow(ticket: TicketDto) -> impl IntoView {
    let (priority_variant, priority_label) = priority_badge(ticket.priority.as_deref());
    let status = match ticket.status.as_str() {
        "answered" => "پاسخ داده شده",
        "closed" => "بسته",
        _ => "باز",
    };

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{ticket.subject}</span>
                <span class="list-row__meta">{or_dash(ticket.user_name.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant=priority_variant>{priority_label}</Badge>
                <Badge>{status}</Badge>
                <span class="list-row__meta">{format!("{} پیام", ticket.messages_count)}</span>
                <span class="list-row__date">{short_date(&ticket.created_at)}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::general_list::filters::validate_declarations;

    #[test]
    fn test_filters_are_valid() {
        assert_eq!(validate_declarations(&ticket_filters()), Ok(()));
    }

    #[test]
    fn test_missing_priority_is_normal() {
        assert_eq!(priority_badge(None), ("neutral", "عادی"));
        assert_eq!(priority_badge(Some("high")).0, "error");
    }
}
