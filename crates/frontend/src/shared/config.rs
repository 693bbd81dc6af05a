//! Application configuration.
//!
//! The admin panel ships as a static WASM bundle, so the configuration is a
//! TOML document embedded at build time.

use crate::shared::error::ConfigError;
use contracts::shared::list_query::DEFAULT_SORT_BY;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port of the REST backend on the page's host
    pub port: u16,
    /// Path prefix of every endpoint, e.g. "/api/v1"
    pub prefix: String,
}

/// Defaults shared by every list screen.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: u32,
    pub sort_by: String,
    pub search_debounce_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            prefix: "/api/v1".to_string(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            sort_by: DEFAULT_SORT_BY.to_string(),
            search_debounce_ms: 500,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api/v1"

[list]
page_size = 10
sort_by = "createdAt:desc"
search_debounce_ms = 500
"#;

/// Parses and checks a configuration document.
pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(source)?;

    if config.list.page_size == 0 {
        return Err(ConfigError::Invalid {
            field: "list.page_size",
            reason: "must be positive".to_string(),
        });
    }
    if !config.api.prefix.is_empty() && !config.api.prefix.starts_with('/') {
        return Err(ConfigError::Invalid {
            field: "api.prefix",
            reason: format!("'{}' must start with '/'", config.api.prefix),
        });
    }

    Ok(config)
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Using default configuration: {}", e);
        AppConfig::default()
    }
});

/// Configuration loaded once per page load.
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.list.sort_by, "createdAt:desc");
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let config = parse_config("[api]\nport = 8080\nprefix = \"/api\"\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.list, ListConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = "[list]\npage_size = 0\nsort_by = \"createdAt:desc\"\nsearch_debounce_ms = 500\n";
        assert!(matches!(
            parse_config(zero),
            Err(ConfigError::Invalid { field: "list.page_size", .. })
        ));

        let prefix = "[api]\nport = 3000\nprefix = \"api\"\n";
        assert!(matches!(
            parse_config(prefix),
            Err(ConfigError::Invalid { field: "api.prefix", .. })
        ));

        assert!(matches!(parse_config("list = 3"), Err(ConfigError::Parse(_))));
    }
}
