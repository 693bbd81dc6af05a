use serde::{Deserialize, Serialize};

/// Paged response as the admin API sends it.
///
/// Every field may be missing; `page`/`limit` echoes are ignored because the
/// client already knows what it asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct RawPage<T> {
    #[serde(default)]
    pub results: Option<Vec<T>>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> Default for RawPage<T> {
    fn default() -> Self {
        Self {
            results: None,
            total_results: None,
            total_pages: None,
        }
    }
}

/// Paged result with every counter filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

impl<T> PageResult<T> {
    /// Result shown while nothing has arrived yet.
    pub fn empty(limit: u32) -> Self {
        Self {
            results: Vec::new(),
            page: 1,
            limit,
            total_pages: 0,
            total_results: 0,
        }
    }

    /// Fills the gaps of a server response.
    ///
    /// Server counters are trusted as-is: `results.len()` is not checked
    /// against `total_results` or `total_pages`.
    pub fn normalize(raw: Option<RawPage<T>>, current_page: u32, limit: u32) -> Self {
        match raw {
            None => Self::empty(limit),
            Some(raw) => Self {
                results: raw.results.unwrap_or_default(),
                page: current_page,
                limit,
                total_pages: raw.total_pages.unwrap_or(0),
                total_results: raw.total_results.unwrap_or(0),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_without_data() {
        let result: PageResult<String> = PageResult::normalize(None, 1, 10);
        assert_eq!(
            result,
            PageResult {
                results: vec![],
                page: 1,
                limit: 10,
                total_pages: 0,
                total_results: 0,
            }
        );
    }

    #[test]
    fn test_normalize_ignores_requested_page_without_data() {
        let result: PageResult<String> = PageResult::normalize(None, 4, 25);
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 25);
    }

    #[test]
    fn test_normalize_partial_response() {
        let raw: RawPage<String> = serde_json::from_str(r#"{"results":["a","b"]}"#).unwrap();
        let result = PageResult::normalize(Some(raw), 3, 10);
        assert_eq!(result.results, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.page, 3);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.total_results, 0);
    }

    #[test]
    fn test_normalize_trusts_server_counts() {
        let raw: RawPage<u32> = serde_json::from_str(
            r#"{"results":[1],"page":2,"limit":10,"totalPages":7,"totalResults":64}"#,
        )
        .unwrap();
        let result = PageResult::normalize(Some(raw), 2, 10);
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.total_pages, 7);
        assert_eq!(result.total_results, 64);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> RawPage<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_item_type_needs_no_default() {
        let raw: RawPage<Row> = decode(r#"{"results":[{"id":4}],"totalPages":1}"#);
        assert_eq!(raw.results, Some(vec![Row { id: 4 }]));
        assert_eq!(decode::<Row>("{}"), RawPage::default());
    }

    #[test]
    fn test_missing_results_become_empty() {
        let raw: RawPage<u32> = serde_json::from_str(r#"{"totalResults":0}"#).unwrap();
        let result = PageResult::normalize(Some(raw), 1, 10);
        assert!(result.is_empty());
    }
}
