use super::date_range::DateRangeStore;
use super::filters::FilterStore;
use super::query::{build_query_params, QueryInputs};
use crate::shared::config::ListConfig;
use crate::shared::error::FetchError;
use chrono::NaiveDate;
use contracts::shared::list_query::{
    format_query_date, DateBound, DateRangeKind, FilterDeclaration, FilterValue, QueryParams,
};
use leptos::prelude::*;
use std::collections::BTreeSet;

pub const SECTION_FILTERS: &str = "filters";
pub const SECTION_DATES: &str = "dates";

/// Which filter panels are expanded. Presentation only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: BTreeSet<String>,
}

impl AccordionState {
    pub fn toggle(&mut self, section: &str) {
        if !self.open.remove(section) {
            self.open.insert(section.to_string());
        }
    }

    pub fn is_open(&self, section: &str) -> bool {
        self.open.contains(section)
    }
}

/// UI state of one list instance.
#[derive(Clone, Debug)]
pub struct ListState {
    // Пагинация
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,

    // Поиск: ввод и значение после debounce
    pub search_input: String,
    pub search: String,

    // Фильтры
    pub filters: FilterStore,
    pub dates: DateRangeStore,
    pub show_date_filter: bool,

    pub panels: AccordionState,
}

impl ListState {
    pub fn new(
        limit: u32,
        sort_by: impl Into<String>,
        declarations: &[FilterDeclaration],
        show_date_filter: bool,
    ) -> Self {
        Self {
            page: 1,
            limit,
            sort_by: sort_by.into(),
            search_input: String::new(),
            search: String::new(),
            filters: FilterStore::new(declarations),
            dates: DateRangeStore::default(),
            show_date_filter,
            panels: AccordionState::default(),
        }
    }

    pub fn from_config(
        config: &ListConfig,
        declarations: &[FilterDeclaration],
        show_date_filter: bool,
    ) -> Self {
        Self::new(config.page_size, config.sort_by.clone(), declarations, show_date_filter)
    }

    /// Raw text of the search box; does not touch the query.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Debounced search text. A new search starts from the first page.
    pub fn apply_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search {
            self.search = text;
            self.page = 1;
        }
    }

    /// Filtering always restarts from page 1.
    pub fn set_filter_value(&mut self, key: &str, value: FilterValue) {
        self.filters.set(key, value);
        self.page = 1;
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.filters.clear(key);
        self.page = 1;
    }

    pub fn set_date_bound(&mut self, kind: DateRangeKind, bound: DateBound, date: Option<NaiveDate>) {
        self.dates.set_bound(kind, bound, date);
        self.page = 1;
    }

    /// New declaration list: the filter map is rebuilt from scratch.
    pub fn reinitialize_filters(&mut self, declarations: &[FilterDeclaration]) {
        self.filters.initialize(declarations);
        self.page = 1;
    }

    /// Drops search, filters and dates.
    pub fn clear_all(&mut self) {
        self.search_input.clear();
        self.search.clear();
        self.filters.reset();
        self.dates.clear_all();
        self.page = 1;
    }

    /// Page change keeps every filter as it is.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn toggle_panel(&mut self, section: &str) {
        self.panels.toggle(section);
    }

    pub fn query_params(&self) -> QueryParams {
        build_query_params(&QueryInputs {
            page: self.page,
            limit: self.limit,
            sort_by: &self.sort_by,
            search: &self.search,
            filters: &self.filters,
            dates: &self.dates,
            date_filter_enabled: self.show_date_filter,
        })
    }

    pub fn active_filters_count(&self) -> usize {
        let dates = if self.show_date_filter {
            self.dates.active_count()
        } else {
            0
        };
        self.filters.active_count() + dates
    }

    /// Chips for everything that narrows the current query.
    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if !self.search.is_empty() {
            chips.push(FilterChip {
                target: ChipTarget::Search,
                label: format!("جستجو: {}", self.search),
            });
        }
        for (key, value) in self.filters.active() {
            let label = self.filters.label_of(key).unwrap_or(key.as_str());
            let label = match value {
                FilterValue::Flag(_) => label.to_string(),
                other => format!("{}: {}", label, other.to_query_value()),
            };
            chips.push(FilterChip {
                target: ChipTarget::Filter(key.clone()),
                label,
            });
        }
        if self.show_date_filter {
            for (kind, bound, date) in self.dates.bounds() {
                chips.push(FilterChip {
                    target: ChipTarget::Date(kind, bound),
                    label: format!(
                        "{} {} {}",
                        date_range_label(kind),
                        date_bound_label(bound),
                        format_query_date(date)
                    ),
                });
            }
        }
        chips
    }

    pub fn remove_chip(&mut self, target: &ChipTarget) {
        match target {
            ChipTarget::Search => {
                self.search_input.clear();
                self.apply_search("");
            }
            ChipTarget::Filter(key) => self.clear_filter(key),
            ChipTarget::Date(kind, bound) => self.set_date_bound(*kind, *bound, None),
        }
    }
}

/// What a filter chip removes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChipTarget {
    Search,
    Filter(String),
    Date(DateRangeKind, DateBound),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChip {
    pub target: ChipTarget,
    pub label: String,
}

pub fn date_range_label(kind: DateRangeKind) -> &'static str {
    match kind {
        DateRangeKind::Created => "تاریخ ایجاد",
        DateRangeKind::Updated => "تاریخ به‌روزرسانی",
    }
}

pub fn date_bound_label(bound: DateBound) -> &'static str {
    match bound {
        DateBound::From => "از",
        DateBound::To => "تا",
    }
}

pub fn create_state(
    config: &ListConfig,
    declarations: &[FilterDeclaration],
    show_date_filter: bool,
) -> RwSignal<ListState> {
    RwSignal::new(ListState::from_config(config, declarations, show_date_filter))
}

/// What the body of a list shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListPhase {
    /// No query has resolved yet
    Idle,
    Loading,
    Loaded,
    Empty,
    /// Fetch failed; rendered with a retry action
    Failed(FetchError),
}

impl ListPhase {
    /// Loading wins over everything so a stale "nothing found" never flashes;
    /// an error wins over stale data.
    pub fn resolve(
        has_data: bool,
        is_loading: bool,
        error: Option<&FetchError>,
        result_count: usize,
    ) -> Self {
        if is_loading {
            return ListPhase::Loading;
        }
        if let Some(error) = error {
            return ListPhase::Failed(error.clone());
        }
        if !has_data {
            ListPhase::Idle
        } else if result_count > 0 {
            ListPhase::Loaded
        } else {
            ListPhase::Empty
        }
    }
}
