use serde::{Deserialize, Serialize};

/// Статусы курса (значения параметра `status`)
pub const COURSE_STATUSES: [&str; 3] = ["draft", "published", "archived"];

/// Строка списка курсов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub coach_name: Option<String>,
    pub status: String,
    /// Цена в томанах
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub sessions_count: u32,
    pub created_at: String,
}
