use super::date_range::DateRangeStore;
use super::filters::FilterStore;
use contracts::shared::list_query::QueryParams;

/// Everything the query of a list depends on.
#[derive(Debug, Clone, Copy)]
pub struct QueryInputs<'a> {
    pub page: u32,
    pub limit: u32,
    pub sort_by: &'a str,
    /// Debounced search text
    pub search: &'a str,
    pub filters: &'a FilterStore,
    pub dates: &'a DateRangeStore,
    pub date_filter_enabled: bool,
}

/// Assembles the query parameters of a list.
///
/// Always returns a fresh value: empty filter values are left out, search is
/// sent under both `search` and `q`, date bounds only when the date filter is
/// enabled.
pub fn build_query_params(inputs: &QueryInputs<'_>) -> QueryParams {
    let mut params = QueryParams::new(inputs.page, inputs.limit, inputs.sort_by);

    params.set_search(inputs.search);

    for (key, value) in inputs.filters.active() {
        params.filters.insert(key.clone(), value.clone());
    }

    if inputs.date_filter_enabled {
        for (kind, bound, date) in inputs.dates.bounds() {
            params.set_date_bound(kind, bound, date);
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::list_query::{
        DateBound, DateRangeKind, FilterDeclaration, FilterValue, DEFAULT_SORT_BY,
    };

    fn inputs<'a>(
        search: &'a str,
        filters: &'a FilterStore,
        dates: &'a DateRangeStore,
        date_filter_enabled: bool,
    ) -> QueryInputs<'a> {
        QueryInputs {
            page: 1,
            limit: 10,
            sort_by: DEFAULT_SORT_BY,
            search,
            filters,
            dates,
            date_filter_enabled,
        }
    }

    #[test]
    fn test_base_params() {
        let filters = FilterStore::default();
        let dates = DateRangeStore::default();
        let params = build_query_params(&inputs("", &filters, &dates, false));

        assert_eq!(params, QueryParams::new(1, 10, "createdAt:desc"));
        assert_eq!(params.search, None);
        assert_eq!(params.q, None);
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let mut filters = FilterStore::new(&[
            FilterDeclaration::options("status", "وضعیت", ["open", "closed"]),
            FilterDeclaration::checkbox("is_active", "فعال"),
            FilterDeclaration::search("role", "نقش"),
        ]);
        filters.set("status", "".into());
        filters.set("is_active", false.into());
        filters.set("role", "admin".into());
        let dates = DateRangeStore::default();

        let params = build_query_params(&inputs("", &filters, &dates, false));
        assert_eq!(params.filters.len(), 1);
        assert_eq!(params.filters.get("role"), Some(&FilterValue::from("admin")));
        assert!(!params.to_query_pairs().iter().any(|(k, _)| k == "status" || k == "is_active"));
    }

    #[test]
    fn test_search_and_q_travel_together() {
        let filters = FilterStore::default();
        let dates = DateRangeStore::default();
        for text in ["", "a", "کلاس یوگا"] {
            let params = build_query_params(&inputs(text, &filters, &dates, false));
            assert_eq!(params.search, params.q);
            assert_eq!(params.search.is_some(), !text.is_empty());
        }
    }

    #[test]
    fn test_dates_only_when_enabled() {
        let filters = FilterStore::default();
        let mut dates = DateRangeStore::default();
        dates.set_bound(
            DateRangeKind::Created,
            DateBound::From,
            NaiveDate::from_ymd_opt(2024, 1, 9),
        );
        dates.set_bound(
            DateRangeKind::Updated,
            DateBound::To,
            NaiveDate::from_ymd_opt(2024, 12, 31),
        );

        let disabled = build_query_params(&inputs("", &filters, &dates, false));
        assert_eq!(disabled.created_from_date, None);
        assert_eq!(disabled.updated_to_date, None);

        let enabled = build_query_params(&inputs("", &filters, &dates, true));
        assert_eq!(enabled.created_from_date.as_deref(), Some("2024-01-09"));
        assert_eq!(enabled.created_to_date, None);
        assert_eq!(enabled.updated_to_date.as_deref(), Some("2024-12-31"));
    }

    #[test]
    fn test_builder_is_idempotent() {
        let mut filters = FilterStore::new(&[FilterDeclaration::checkbox("is_free", "رایگان")]);
        filters.set("is_free", true.into());
        let dates = DateRangeStore::default();
        let input = inputs("python", &filters, &dates, true);

        let first = build_query_params(&input);
        let second = build_query_params(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_numeric_zero_filter_is_sent() {
        let mut filters = FilterStore::new(&[FilterDeclaration::search("min_price", "حداقل قیمت")]);
        filters.set("min_price", 0i64.into());
        let dates = DateRangeStore::default();

        let params = build_query_params(&inputs("", &filters, &dates, false));
        assert_eq!(params.filters.get("min_price"), Some(&FilterValue::Number(0)));
    }
}
