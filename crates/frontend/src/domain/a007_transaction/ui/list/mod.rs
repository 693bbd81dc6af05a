use crate::shared::components::ui::Badge;
use crate::shared::general_list::{Endpoint, GeneralList};
use crate::shared::list_utils::{format_amount, or_dash, short_date};
use contracts::domain::a007_transaction::{TransactionDto, TRANSACTION_STATUSES};
use contracts::shared::list_query::FilterDeclaration;
use leptos::prelude::*;

pub const TRANSACTIONS: Endpoint<TransactionDto> = Endpoint::new("/transactions");

pub fn transaction_filters() -> Vec<FilterDeclaration> {
    vec![
        FilterDeclaration::options("status", "وضعیت پرداخت", TRANSACTION_STATUSES),
        FilterDeclaration::search("gateway", "درگاه"),
        FilterDeclaration::search("orderId", "شناسه سفارش"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn TransactionList() -> impl IntoView {
    view! {
        <GeneralList
            query=TRANSACTIONS
            filters=transaction_filters()
            render_item=Callback::new(|tx: TransactionDto| view! { <TransactionRow tx=tx /> }.into_any())
            title="تراکنش‌ها"
            search_placeholder="جستجو در کد پیگیری"
            show_date_filter=true
            limit=20
        />
    }
}

#[component]
#[allow(non_snake_case)]
fn TransactionRow(tx: TransactionDto) -> impl IntoView {
    let (variant, label) = match tx.status.as_str() {
        "success" => ("success", "موفق"),
        "failed" => ("error", "ناموفق"),
        _ => ("warning", "در حال انجام"),
    };

    view! {
        <div class="list-row">
            <div class="list-row__main">
                <span class="list-row__title">{format_amount(tx.amount)}</span>
                <span class="list-row__meta">{or_dash(tx.reference_code.as_deref())}</span>
                <span class="list-row__meta">{or_dash(tx.gateway.as_deref())}</span>
            </div>
            <div class="list-row__side">
                <Badge variant=variant>{label}</Badge>
                <span class="list-row__date">{short_date(&tx.created_at)}</span>
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
        assert_eq!(validate_declarations(&transaction_filters()), Ok(()));
    }
}
