use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{format_amount, short_date};
use contracts::domain::a005_coupon::{CouponDto, DISCOUNT_TYPES};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const COUPONS: Endpoint<CouponDto> = Endpoint::new("/coupons");

pub fn coupon_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("discountType", "نوع تخفیف", DISCOUNT_TYPES),
        FilterDeclaration::checkbox("isActive", "فقط فعال"),
    ]
}

/// "20%" для процентной скидки, сумма для фиксированной
pub fn discount_label(coupon: &CouponDto) -> String {
    if coupon.discount_type == "percent" {
        format!("{}%", coupon.discount_value)
    } else {
        format_amount(coupon.discount_value)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CouponList() -> impl IntoView {
    view! {
        <GeneralList
            query=COUPONS
            filters=coupon_filters()
            render_item=Callback::new(|coupon: CouponDto| view! { <CouponRow coupon=coupon /> }.into_any())
            title="کدهای تخفیف"
            search_placeholder="جستجو در کد تخفیف"
            show_date_filter=true
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn CouponRow(coupon: CouponDto) -> impl IntoView {
    let discount = discount_label(&coupon);
    let usage = match coupon.usage_limit {
        Some(limit) => format!("{} از {}", coupon.used_count, limit),
        None => coupon.used_count.to_string(),
    };
    let expires = coupon
        .expires_at
        .as_deref()
        .map(short_date)
        .unwrap_or_else(|| "بدون انقضا".to_string());

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title list-row__title--mono">{coupon.code}</span>
                <span class="list-row__meta">{discount}</span>
            </div>
            <div class="list-row__side">
                {if coupon.is_active {
                    view! { <Badge variant="success">"فعال"</Badge> }.into_any()
                } else {
                    view! { <Badge>"غیرفعال"</Badge> }.into_any()
                }}
                <span class="list-row__meta">{usage}</span>
                <span class="list-row__date">{expires}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::general_list::filters::validate_declarations;

    fn coupon(discount_type: &str, value: i64) -> CouponDto {
        CouponDto {
            id: "c1".to_string(),
            code: "NOWRUZ".to_string(),
            discount_type: discount_type.to_string(),
            discount_value: value,
            usage_limit: None,
            used_count: 0,
            is_active: true,
            expires_at: None,
            created_at: "2024-03-20T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_filters_are_valid() {
        assert_eq!(validate_declarations(&coupon_filters()), Ok(()));
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(discount_label(&coupon("percent", 20)), "20%");
        assert_eq!(discount_label(&coupon("fixed", 50_000)), "50,000 تومان");
    }
}
