use serde::{Deserialize, Serialize};

/// Каналы доставки уведомлений (значения параметра `channel`)
pub const NOTIFICATION_CHANNELS: [&str; 3] = ["sms", "push", "in_app"];

/// Строка списка уведомлений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub channel: String,
    #[serde(default)]
    pub is_sent: bool,
    #[serde(default)]
    pub recipients_count: u32,
    pub created_at: String,
}
