use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{format_amount, or_dash, short_date};
use contracts::domain::a006_order::{OrderDto, ORDER_STATUSES};
use contracts::shared::list_query::{DateRangeKind, FilterDeclaration};
use leptos::prelude::*;

pub const ORDERS: Endpoint<OrderDto> = Endpoint::new("/orders");

pub fn order_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("status", "وضعیت سفارش", ORDER_STATUSES),
        FilterDeclaration::search("couponCode", "کد تخفیف"),
    ]
}

fn status_badge(status: &str) -> (&'static str, &'static str) {
    match status {
        "paid" => ("success", "پرداخت شده"),
        "canceled" => ("error", "لغو شده"),
        "refunded" => ("neutral", "مسترد شده"),
        _ => ("warning", "در انتظار پرداخت"),
    }
}

/// Заказы: фильтр по дате создания и по дате последнего изменения
#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    view! {
        <GeneralList
            query=ORDERS
            filters=order_filters()
            render_item=Callback::new(|order: OrderDto| view! { <OrderRow order=order /> }.into_any())
            title="سفارش‌ها"
            search_placeholder="جستجو در شماره سفارش یا نام خریدار"
            show_date_filter=true
            date_ranges=vec![DateRangeKind::Created, DateRangeKind::Updated]
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn OrderRow(order: OrderDto) -> impl IntoView {
    let (variant, label) = status_badge(&order.status);
    let number = order.order_number.clone().unwrap_or_else(|| order.id.clone());

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{format!("سفارش #{}", number)}</span>
                <span class="list-row__meta">{or_dash(order.user_name.as_deref())}</span>
                <span class="list-row__meta">{or_dash(order.course_title.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant=variant>{label}</Badge>
                <span class="list-row__meta">{format_amount(order.total_amount)}</span>
                {order.coupon_code.map(|code| view! { <Badge variant="primary">{code}</Badge> })}
                <span class="list-row__date">{short_date(&order.created_at)}</span>
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
        assert_eq!(validate_declarations(&order_filters()), Ok(()));
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge("paid"), ("success", "پرداخت شده"));
        assert_eq!(status_badge("pending").0, "warning");
    }
}
