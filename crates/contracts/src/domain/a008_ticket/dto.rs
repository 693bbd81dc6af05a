use serde::{Deserialize, Serialize};

/// Статусы тикета (значения параметра `status`)
pub const TICKET_STATUSES: [&str; 3] = ["open", "answered", "closed"];

/// Приоритеты тикета (значения параметра `priority`)
pub const TICKET_PRIORITIES: [&str; 3] = ["low", "medium", "high"];

/// Строка списка тикетов поддержки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub messages_count: u32,
    pub created_at: String,
}
