//! "Created between" / "updated between" bounds of a list.

use chrono::NaiveDate;
use contracts::shared::list_query::{DateBound, DateRangeKind, QUERY_DATE_FORMAT};
use std::collections::BTreeMap;

/// One date range; each bound is optional and absence means "no bound".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn get(&self, bound: DateBound) -> Option<NaiveDate> {
        match bound {
            DateBound::From => self.from,
            DateBound::To => self.to,
        }
    }

    pub fn set(&mut self, bound: DateBound, date: Option<NaiveDate>) {
        match bound {
            DateBound::From => self.from = date,
            DateBound::To => self.to = date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Bounds in `from ≤ to` order are accepted as-is; a reversed range is
    /// passed through too, the server answers it with an empty page.
    pub fn is_reversed(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }
}

/// Date ranges of a list, independent of the other filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeStore {
    ranges: BTreeMap<DateRangeKind, DateRange>,
}

impl DateRangeStore {
    pub fn range(&self, kind: DateRangeKind) -> DateRange {
        self.ranges.get(&kind).copied().unwrap_or_default()
    }

    pub fn set_bound(&mut self, kind: DateRangeKind, bound: DateBound, date: Option<NaiveDate>) {
        let range = self.ranges.entry(kind).or_default();
        range.set(bound, date);
        if range.is_empty() {
            self.ranges.remove(&kind);
        }
    }

    pub fn clear(&mut self, kind: DateRangeKind) {
        self.ranges.remove(&kind);
    }

    pub fn clear_all(&mut self) {
        self.ranges.clear();
    }

    /// Set bounds, ordered by range kind then `from` before `to`.
    pub fn bounds(&self) -> Vec<(DateRangeKind, DateBound, NaiveDate)> {
        let mut bounds = Vec::new();
        for (kind, range) in &self.ranges {
            if let Some(from) = range.from {
                bounds.push((*kind, DateBound::From, from));
            }
            if let Some(to) = range.to {
                bounds.push((*kind, DateBound::To, to));
            }
        }
        bounds
    }

    pub fn active_count(&self) -> usize {
        self.bounds().len()
    }
}

/// Parses the value of an `<input type="date">`; empty or malformed text
/// means "no bound".
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, QUERY_DATE_FORMAT).ok()
}

pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(QUERY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds_are_independent() {
        let mut store = DateRangeStore::default();
        store.set_bound(DateRangeKind::Created, DateBound::To, Some(date(2024, 5, 1)));

        assert_eq!(
            store.range(DateRangeKind::Created),
            DateRange { from: None, to: Some(date(2024, 5, 1)) }
        );
        assert!(store.range(DateRangeKind::Updated).is_empty());
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn test_clearing_last_bound_drops_range() {
        let mut store = DateRangeStore::default();
        store.set_bound(DateRangeKind::Updated, DateBound::From, Some(date(2024, 1, 1)));
        store.set_bound(DateRangeKind::Updated, DateBound::From, None);
        assert_eq!(store, DateRangeStore::default());
    }

    #[test]
    fn test_bounds_order() {
        let mut store = DateRangeStore::default();
        store.set_bound(DateRangeKind::Updated, DateBound::To, Some(date(2024, 2, 2)));
        store.set_bound(DateRangeKind::Created, DateBound::To, Some(date(2024, 1, 31)));
        store.set_bound(DateRangeKind::Created, DateBound::From, Some(date(2024, 1, 1)));

        let kinds: Vec<_> = store.bounds().into_iter().map(|(k, b, _)| (k, b)).collect();
        assert_eq!(
            kinds,
            vec![
                (DateRangeKind::Created, DateBound::From),
                (DateRangeKind::Created, DateBound::To),
                (DateRangeKind::Updated, DateBound::To),
            ]
        );
    }

    #[test]
    fn test_reversed_range() {
        let range = DateRange { from: Some(date(2024, 3, 2)), to: Some(date(2024, 3, 1)) };
        assert!(range.is_reversed());
        assert!(!DateRange::default().is_reversed());
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-03-15"), Some(date(2024, 3, 15)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15.03.2024"), None);
        assert_eq!(format_date_input(Some(date(2024, 3, 5))), "2024-03-05");
        assert_eq!(format_date_input(None), "");
    }
}
