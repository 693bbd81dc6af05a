//! Page registry - единственный источник правды для маппинга page key → View
//!
//! Все ключи страниц собраны здесь: sidebar, URL (`?page=...`) и заголовки
//! берут их отсюда.

use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_coach::ui::list::CoachList;
use crate::domain::a003_course::ui::list::CourseList;
use crate::domain::a004_course_session::ui::list::CourseSessionList;
use crate::domain::a005_coupon::ui::list::CouponList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_transaction::ui::list::TransactionList;
use crate::domain::a008_ticket::ui::list::TicketList;
use crate::domain::a009_notification::ui::list::NotificationList;
use leptos::prelude::*;

/// Страница, открытая по умолчанию
pub const DEFAULT_PAGE_KEY: &str = "a001_user";

/// Заголовок страницы (фарси). Fallback: сам ключ.
pub fn page_label_for_key(key: &str) -> &str {
    match key {
        "a001_user" => "کاربران",
        "a002_coach" => "مربیان",
        "a003_course" => "دوره‌ها",
        "a004_course_session" => "جلسات دوره",
        "a005_coupon" => "کدهای تخفیف",
        "a006_order" => "سفارش‌ها",
        "a007_transaction" => "تراکنش‌ها",
        "a008_ticket" => "تیکت‌های پشتیبانی",
        "a009_notification" => "اعلان‌ها",
        other => other,
    }
}

/// Рендерит страницу по ключу.
///
/// Неизвестный ключ (например, устаревшая ссылка) даёт заглушку.
pub fn render_page_content(key: &str) -> AnyView {
    match key {
        // Пользователи и коучи
        "a001_user" => view! { <UserList /> }.into_any(),
        "a002_coach" => view! { <CoachList /> }.into_any(),

        // Обучение
        "a003_course" => view! { <CourseList /> }.into_any(),
        "a004_course_session" => view! { <CourseSessionList /> }.into_any(),

        // Продажи
        "a005_coupon" => view! { <CouponList /> }.into_any(),
        "a006_order" => view! { <OrderList /> }.into_any(),
        "a007_transaction" => view! { <TransactionList /> }.into_any(),

        // Поддержка
        "a008_ticket" => view! { <TicketList /> }.into_any(),
        "a009_notification" => view! { <NotificationList /> }.into_any(),

        _ => {
            log::warn!("Unknown page key: {}", key);
            view! {
                <div class="page-placeholder" dir="rtl">
                    {format!("صفحه «{}» پیدا نشد", key)}
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(page_label_for_key(DEFAULT_PAGE_KEY), "کاربران");
        assert_eq!(page_label_for_key("a006_order"), "سفارش‌ها");
        assert_eq!(page_label_for_key("x999"), "x999");
    }
}
