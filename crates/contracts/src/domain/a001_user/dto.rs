use serde::{Deserialize, Serialize};

/// Роли пользователей платформы (значения параметра `role`)
pub const USER_ROLES: [&str; 3] = ["user", "coach", "admin"];

/// Строка списка пользователей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_mobile_verified: bool,
    pub created_at: String,
}

impl UserDto {
    /// Имя для отображения: "имя фамилия", иначе мобильный, иначе id
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            full
        } else if let Some(mobile) = self.mobile.as_deref().filter(|m| !m.is_empty()) {
            mobile.to_string()
        } else {
            self.id.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>, mobile: Option<&str>) -> UserDto {
        UserDto {
            id: "u1".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            mobile: mobile.map(str::to_string),
            email: None,
            role: "user".to_string(),
            is_active: true,
            is_mobile_verified: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(user(Some("سارا"), Some("احمدی"), None).display_name(), "سارا احمدی");
        assert_eq!(user(None, None, Some("09120000000")).display_name(), "09120000000");
        assert_eq!(user(Some(""), None, None).display_name(), "u1");
    }
}
