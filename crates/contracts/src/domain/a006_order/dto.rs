use serde::{Deserialize, Serialize};

/// Статусы заказа (значения параметра `status`)
pub const ORDER_STATUSES: [&str; 4] = ["pending", "paid", "canceled", "refunded"];

/// Строка списка заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
    pub status: String,
    /// Итоговая сумма в томанах (после купона)
    pub total_amount: i64,
    #[serde(default)]
    pub coupon_code: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}
