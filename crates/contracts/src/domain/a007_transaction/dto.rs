use serde::{Deserialize, Serialize};

/// Статусы платежа (значения параметра `status`)
pub const TRANSACTION_STATUSES: [&str; 3] = ["success", "failed", "pending"];

/// Строка списка транзакций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub amount: i64,
    pub status: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub reference_code: Option<String>,
    pub created_at: String,
}
