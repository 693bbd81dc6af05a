use serde::{Deserialize, Serialize};

/// Способ проведения занятия (значения параметра `type`)
pub const SESSION_TYPES: [&str; 2] = ["online", "offline"];

/// Строка списка занятий (программы курса)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSessionDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(rename = "type")]
    pub session_type: String,
    /// Начало занятия, ISO 8601
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub enrolled_count: u32,
    pub created_at: String,
}
