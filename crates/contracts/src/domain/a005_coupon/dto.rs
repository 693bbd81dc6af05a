use serde::{Deserialize, Serialize};

/// Тип скидки купона (значения параметра `discountType`)
pub const DISCOUNT_TYPES: [&str; 2] = ["percent", "fixed"];

/// Строка списка купонов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: String,
    pub code: String,
    pub discount_type: String,
    pub discount_value: i64,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub created_at: String,
}
