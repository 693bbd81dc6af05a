use serde::{Deserialize, Serialize};

/// Строка списка коучей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachDto {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub courses_count: u32,
    pub created_at: String,
}
