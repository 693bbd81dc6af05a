//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use crate::shared::config::app_config;
use crate::shared::error::FetchError;
use crate::system::auth::storage;
use contracts::shared::list_query::QueryParams;
use contracts::shared::paging::RawPage;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, app_config().api.port)
}

/// Build a full API URL from an endpoint path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/users"); // http://host:3000/api/v1/users
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", api_base(), app_config().api.prefix, path)
}

/// Encodes list parameters as a query string (without the leading `?`).
pub fn query_string(params: &QueryParams) -> Result<String, FetchError> {
    let pairs: BTreeMap<String, String> = params.to_query_pairs().into_iter().collect();
    serde_qs::to_string(&pairs).map_err(|e| FetchError::Query(e.to_string()))
}

fn auth_header() -> Result<String, FetchError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(FetchError::NotAuthenticated)
}

/// Fetch one page of a list endpoint
pub async fn fetch_page<T>(path: &str, params: &QueryParams) -> Result<RawPage<T>, FetchError>
where
    T: DeserializeOwned,
{
    let auth_header = auth_header()?;
    let url = format!("{}?{}", api_url(path), query_string(params)?);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    match response.status() {
        401 => {
            storage::clear_tokens();
            return Err(FetchError::NotAuthenticated);
        }
        status if !response.ok() => return Err(FetchError::Status(status)),
        _ => {}
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode_page(&body)
}

/// Parses a list response body; missing fields are filled in later by
/// `PageResult::normalize`.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<RawPage<T>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{FilterValue, DEFAULT_SORT_BY};

    #[test]
    fn test_query_string_contains_every_pair() {
        let mut params = QueryParams::new(2, 10, DEFAULT_SORT_BY);
        params.set_search("foo");
        params
            .filters
            .insert("status".to_string(), FilterValue::from("open"));
        params
            .filters
            .insert("is_active".to_string(), FilterValue::from(true));

        let qs = query_string(&params).unwrap();
        let parts: Vec<&str> = qs.split('&').collect();
        for expected in ["page=2", "limit=10", "search=foo", "q=foo", "status=open", "is_active=true"] {
            assert!(parts.contains(&expected), "{} missing in {}", expected, qs);
        }
        assert!(parts.iter().any(|p| p.starts_with("sortBy=")));
        assert_eq!(parts.len(), 7);
    }

    #[test]
    fn test_decode_page() {
        let body = r#"{"results":[{"id":1},{"id":2}],"page":3,"limit":2,"totalPages":5,"totalResults":9}"#;
        let page: RawPage<serde_json::Value> = decode_page(body).unwrap();
        assert_eq!(page.results.map(|r| r.len()), Some(2));
        assert_eq!(page.total_pages, Some(5));
        assert_eq!(page.total_results, Some(9));

        let sparse: RawPage<serde_json::Value> = decode_page("{}").unwrap();
        assert!(sparse.results.is_none());

        assert!(matches!(
            decode_page::<serde_json::Value>("<html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_page_of_dto() {
        use contracts::domain::a006_order::OrderDto;

        let body = r#"{"results":[{"id":"o1","status":"paid","totalAmount":1250000,"createdAt":"2024-05-01T10:00:00Z"}],"totalResults":1}"#;
        let page: RawPage<OrderDto> = decode_page(body).unwrap();
        let orders = page.results.unwrap();
        assert_eq!(orders[0].id, "o1");
        assert_eq!(orders[0].total_amount, 1_250_000);
        assert_eq!(page.total_pages, None);
    }

    #[test]
    fn test_query_string_without_search() {
        let params = QueryParams::new(1, 10, DEFAULT_SORT_BY);
        let qs = query_string(&params).unwrap();
        assert!(!qs.contains("search="));
        assert!(!qs.split('&').any(|p| p.starts_with("q=")));
    }
}
