//! Query contract of server-driven list screens.
//!
//! Every list endpoint of the admin API accepts the same flat set of query
//! parameters: paging (`page`, `limit`), ordering (`sortBy`), free-text search
//! (`search` and its legacy alias `q`), one parameter per declared filter and
//! optional `*_from_date` / `*_to_date` bounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default ordering for list endpoints: newest first.
pub const DEFAULT_SORT_BY: &str = "createdAt:desc";

/// Parameters owned by the list itself; no filter may use these keys.
pub const RESERVED_QUERY_KEYS: [&str; 9] = [
    "page",
    "limit",
    "sortBy",
    "search",
    "q",
    "created_from_date",
    "created_to_date",
    "updated_from_date",
    "updated_to_date",
];

pub fn is_reserved_query_key(key: &str) -> bool {
    RESERVED_QUERY_KEYS.contains(&key)
}

/// Wire format of date bounds (`YYYY-MM-DD`, Gregorian).
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Kind of a user-facing filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Free-text input
    Search,
    /// Boolean toggle
    Checkbox,
    /// Single choice from a fixed list of options
    Options,
}

/// Metadata of one filter control and the query parameter it drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDeclaration {
    pub query_param_key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    /// Choices of an `Options` filter, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FilterDeclaration {
    pub fn search(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            query_param_key: key.into(),
            label: label.into(),
            kind: FilterKind::Search,
            options: Vec::new(),
        }
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            query_param_key: key.into(),
            label: label.into(),
            kind: FilterKind::Checkbox,
            options: Vec::new(),
        }
    }

    pub fn options<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query_param_key: key.into(),
            label: label.into(),
            kind: FilterKind::Options,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Value a freshly mounted list starts with for this filter.
    pub fn default_value(&self) -> FilterValue {
        FilterValue::default_for(self.kind)
    }
}

/// Current value of a filter.
///
/// Search and options filters hold text, checkboxes hold a flag. Numeric values
/// are accepted for endpoints that filter by numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl FilterValue {
    pub fn default_for(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Checkbox => FilterValue::Flag(false),
            FilterKind::Search | FilterKind::Options => FilterValue::Text(String::new()),
        }
    }

    /// Whether this value means "no filter" for a control of `kind`.
    ///
    /// Empty text and an unchecked flag are empty whatever the declared kind;
    /// a number is never empty, `0` included.
    pub fn is_empty_for(&self, kind: FilterKind) -> bool {
        match (self, kind) {
            (FilterValue::Text(text), FilterKind::Search | FilterKind::Options) => {
                text.is_empty()
            }
            (FilterValue::Flag(flag), FilterKind::Checkbox) => !flag,
            _ => self.is_empty_sentinel(),
        }
    }

    /// Kind-agnostic emptiness: `""` and `false`.
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(self, FilterValue::Text(t) if t.is_empty())
            || matches!(self, FilterValue::Flag(false))
    }

    /// Representation of the value in a query string.
    pub fn to_query_value(&self) -> String {
        match self {
            FilterValue::Flag(flag) => flag.to_string(),
            FilterValue::Number(number) => number.to_string(),
            FilterValue::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

/// Which timestamp a date range constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRangeKind {
    Created,
    Updated,
}

impl DateRangeKind {
    pub fn from_key(self) -> &'static str {
        match self {
            DateRangeKind::Created => "created_from_date",
            DateRangeKind::Updated => "updated_from_date",
        }
    }

    pub fn to_key(self) -> &'static str {
        match self {
            DateRangeKind::Created => "created_to_date",
            DateRangeKind::Updated => "updated_to_date",
        }
    }
}

/// Lower or upper end of a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateBound {
    From,
    To,
}

impl DateBound {
    pub fn key(self, kind: DateRangeKind) -> &'static str {
        match self {
            DateBound::From => kind.from_key(),
            DateBound::To => kind.to_key(),
        }
    }
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

/// Flat query sent to a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParams {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Legacy alias of `search`; always equal to it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_to_date: Option<String>,
}

impl QueryParams {
    pub fn new(page: u32, limit: u32, sort_by: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            limit,
            sort_by: sort_by.into(),
            search: None,
            q: None,
            filters: BTreeMap::new(),
            created_from_date: None,
            created_to_date: None,
            updated_from_date: None,
            updated_to_date: None,
        }
    }

    /// Sets `search` and `q` together; empty text clears both.
    pub fn set_search(&mut self, text: &str) {
        if text.is_empty() {
            self.search = None;
            self.q = None;
        } else {
            self.search = Some(text.to_string());
            self.q = Some(text.to_string());
        }
    }

    pub fn set_date_bound(&mut self, kind: DateRangeKind, bound: DateBound, date: NaiveDate) {
        let slot = match (kind, bound) {
            (DateRangeKind::Created, DateBound::From) => &mut self.created_from_date,
            (DateRangeKind::Created, DateBound::To) => &mut self.created_to_date,
            (DateRangeKind::Updated, DateBound::From) => &mut self.updated_from_date,
            (DateRangeKind::Updated, DateBound::To) => &mut self.updated_to_date,
        };
        *slot = Some(format_query_date(date));
    }

    /// All parameters as `(key, value)` pairs in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("sortBy".to_string(), self.sort_by.clone()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(q) = &self.q {
            pairs.push(("q".to_string(), q.clone()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.to_query_value()));
        }
        let dates = [
            ("created_from_date", &self.created_from_date),
            ("created_to_date", &self.created_to_date),
            ("updated_from_date", &self.updated_from_date),
            ("updated_to_date", &self.updated_to_date),
        ];
        for (key, value) in dates {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys_cover_every_fixed_param() {
        let mut params = QueryParams::new(1, 10, DEFAULT_SORT_BY);
        params.set_search("x");
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for kind in [DateRangeKind::Created, DateRangeKind::Updated] {
            for bound in [DateBound::From, DateBound::To] {
                params.set_date_bound(kind, bound, day);
            }
        }
        for (key, _) in params.to_query_pairs() {
            assert!(is_reserved_query_key(&key), "{}", key);
        }
        assert!(!is_reserved_query_key("status"));
    }

    #[test]
    fn test_default_values_per_kind() {
        assert_eq!(
            FilterDeclaration::checkbox("is_active", "فعال").default_value(),
            FilterValue::Flag(false)
        );
        assert_eq!(
            FilterDeclaration::search("email", "ایمیل").default_value(),
            FilterValue::Text(String::new())
        );
        assert_eq!(
            FilterDeclaration::options("status", "وضعیت", ["open", "closed"]).default_value(),
            FilterValue::Text(String::new())
        );
    }

    #[test]
    fn test_empty_predicate() {
        assert!(FilterValue::from("").is_empty_for(FilterKind::Search));
        assert!(FilterValue::from("").is_empty_for(FilterKind::Options));
        assert!(FilterValue::from(false).is_empty_for(FilterKind::Checkbox));
        assert!(!FilterValue::from(true).is_empty_for(FilterKind::Checkbox));
        assert!(!FilterValue::from("open").is_empty_for(FilterKind::Options));
        // zero is a real value
        assert!(!FilterValue::from(0i64).is_empty_for(FilterKind::Search));
        // mismatched shapes still honour the sentinels
        assert!(FilterValue::from(false).is_empty_for(FilterKind::Search));
        assert!(FilterValue::from("").is_empty_for(FilterKind::Checkbox));
    }

    #[test]
    fn test_declaration_wire_shape() {
        let json = r#"{"queryParamKey":"status","label":"وضعیت","type":"options","options":["open","closed"]}"#;
        let decl: FilterDeclaration = serde_json::from_str(json).unwrap();
        assert_eq!(decl, FilterDeclaration::options("status", "وضعیت", ["open", "closed"]));
    }

    #[test]
    fn test_search_sets_both_keys() {
        let mut params = QueryParams::new(1, 10, DEFAULT_SORT_BY);
        params.set_search("foo");
        assert_eq!(params.search.as_deref(), Some("foo"));
        assert_eq!(params.q.as_deref(), Some("foo"));

        params.set_search("");
        assert_eq!(params.search, None);
        assert_eq!(params.q, None);
    }

    #[test]
    fn test_query_pairs_order_and_format() {
        let mut params = QueryParams::new(2, 10, DEFAULT_SORT_BY);
        params.set_search("ali");
        params
            .filters
            .insert("role".to_string(), FilterValue::from("admin"));
        params
            .filters
            .insert("is_active".to_string(), FilterValue::from(true));
        params.set_date_bound(
            DateRangeKind::Created,
            DateBound::From,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );

        let pairs = params.to_query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["page", "limit", "sortBy", "search", "q", "is_active", "role", "created_from_date"]
        );
        assert!(pairs.contains(&("created_from_date".to_string(), "2024-03-05".to_string())));
        assert!(pairs.contains(&("is_active".to_string(), "true".to_string())));
    }

    #[test]
    fn test_serialized_json_omits_absent_keys() {
        let params = QueryParams::new(1, 10, DEFAULT_SORT_BY);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"page": 1, "limit": 10, "sortBy": "createdAt:desc"})
        );
    }
}
