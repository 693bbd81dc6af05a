use thiserror::Error;

/// Ошибки загрузки данных с API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode query: {0}")]
    Query(String),
}

impl FetchError {
    /// Сообщение для пользователя (фарси)
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotAuthenticated => "نشست شما منقضی شده است. لطفاً دوباره وارد شوید.",
            FetchError::Network(_) => "ارتباط با سرور برقرار نشد.",
            FetchError::Status(status) if *status >= 500 => "خطای سرور. لطفاً بعداً تلاش کنید.",
            FetchError::Status(_) => "درخواست نامعتبر بود.",
            FetchError::Decode(_) | FetchError::Query(_) => "پاسخ سرور قابل پردازش نبود.",
        }
    }
}

/// Ошибки описания фильтров списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterDeclarationError {
    #[error("Duplicate filter key: {0}")]
    DuplicateKey(String),

    #[error("Filter key is reserved by the list: {0}")]
    ReservedKey(String),

    #[error("Options filter without options: {0}")]
    MissingOptions(String),

    #[error("Options declared on a non-options filter: {0}")]
    UnexpectedOptions(String),
}

/// Ошибки конфигурации приложения
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_by_status() {
        assert_eq!(
            FetchError::Status(503).user_message(),
            "خطای سرور. لطفاً بعداً تلاش کنید."
        );
        assert_eq!(FetchError::Status(404).user_message(), "درخواست نامعتبر بود.");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "Server responded with status 500"
        );
        assert_eq!(
            FilterDeclarationError::DuplicateKey("status".to_string()).to_string(),
            "Duplicate filter key: status"
        );
    }
}
