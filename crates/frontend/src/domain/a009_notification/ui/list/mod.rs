use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{or_dash, short_date};
use contracts::domain::a009_notification::{NotificationDto, NOTIFICATION_CHANNELS};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const NOTIFICATIONS: Endpoint<NotificationDto> = Endpoint::new("/notifications");

pub fn notification_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("channel", "کانال ارسال", NOTIFICATION_CHANNELS),
        FilterDeclaration::checkbox("isSent", "ارسال شده"),
    ]
}

fn channel_label(channel: &str) -> &'static str {
    match channel {
        "sms" => "پیامک",
        "push" => "اعلان",
        _ => "درون برنامه",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NotificationList() -> impl IntoView {
    view! {
        <GeneralList
            query=NOTIFICATIONS
            filters=notification_filters()
            render_item=Callback::new(|n: NotificationDto| {
                view! { <NotificationRow notification=n /> }.into_any()
            })
            title="اعلان‌ها"
            search_placeholder="جستجو در عنوان اعلان"
            search_debounce_delay=300
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn NotificationRow(notification: NotificationDto) -> impl IntoView {
    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{notification.title}</span>
                <span class="list-row__meta">{or_dash(notification.body.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant="primary">{channel_label(&notification.channel)}</Badge>
                {if notification.is_sent {
                    view! { <Badge variant="success">"ارسال شده"</Badge> }.into_any()
                } else {
                    view! { <Badge variant="warning">"در صف"</Badge> }.into_any()
                }}
                <span class="list-row__meta">{format!("{} گیرنده", notification.recipients_count)}</span>
                <span class="list-row__date">{short_date(&notification.created_at)}</span>
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
        assert_eq!(validate_declarations(&notification_filters()), Ok(()));
    }
}
