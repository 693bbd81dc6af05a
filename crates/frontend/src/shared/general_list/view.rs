use super::debounce::use_debounced;
use super::fetch::DataQuery;
use super::state::{
    create_state, date_bound_label, date_range_label, ChipTarget, ListPhase, ListState,
    SECTION_DATES, SECTION_FILTERS,
};
use crate::layout::toast_service::ToastService;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::config::app_config;
use crate::shared::error::FetchError;
use crate::shared::list_utils::SearchInput;
use crate::system::auth::context::{logout, AuthState};
use contracts::shared::list_query::{
    DateBound, DateRangeKind, FilterDeclaration, FilterKind, FilterValue,
};
use contracts::shared::paging::PageResult;
use leptos::prelude::*;
use thaw::*;

/// Value of the "all" option of a select filter
const ALL_OPTIONS: &str = "";

/// Server-driven list: search, declared filters, date ranges, paging.
///
/// The component owns only UI state. Rows come from `query`, which receives
/// the current query parameters and reports loading, data and errors.
#[component]
pub fn GeneralList<T, Q>(
    /// Data source
    query: Q,
    /// Declared filters; may be empty
    #[prop(optional, into)]
    filters: Option<Signal<Vec<FilterDeclaration>>>,
    /// Renders one row
    render_item: Callback<T, AnyView>,
    #[prop(into)] title: String,
    #[prop(optional, into)] search_placeholder: String,
    /// Delay between the last keystroke and the search request
    #[prop(optional)]
    search_debounce_delay: Option<u32>,
    #[prop(optional)] show_date_filter: bool,
    /// Ranges offered by the date section
    #[prop(optional)]
    date_ranges: Option<Vec<DateRangeKind>>,
    #[prop(optional)] limit: Option<u32>,
    #[prop(optional, into)] sort_by: Option<String>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    Q: DataQuery<T>,
{
    let config = &app_config().list;
    let filters = filters.unwrap_or_else(|| Signal::stored(Vec::new()));
    let date_ranges = date_ranges.unwrap_or_else(|| vec![DateRangeKind::Created]);
    let debounce_ms = search_debounce_delay.unwrap_or(config.search_debounce_ms);
    let empty_message = empty_message.unwrap_or_else(|| "موردی یافت نشد".to_string());

    let state = create_state(config, &filters.get_untracked(), show_date_filter);
    state.update_untracked(|s| {
        if let Some(limit) = limit {
            s.limit = limit.max(1);
        }
        if let Some(sort_by) = sort_by {
            s.sort_by = sort_by;
        }
    });

    // Новые объявления фильтров: значения строятся заново
    Effect::new(move |prev: Option<Vec<FilterDeclaration>>| {
        let declarations = filters.get();
        if prev.is_some_and(|prev| prev != declarations) {
            state.update(|s| s.reinitialize_filters(&declarations));
        }
        declarations
    });

    // Поиск
    let search_input = Memo::new(move |_| state.with(|s| s.search_input.clone()));
    let debounced_search = use_debounced(Signal::derive(move || search_input.get()), debounce_ms);
    Effect::new(move |_| {
        let text = debounced_search.get();
        if state.with_untracked(|s| s.search != text) {
            state.update(|s| s.apply_search(text));
        }
    });

    // Запрос
    let params = Memo::new(move |_| state.with(|s| s.query_params()));
    let handle = query.use_query(params.into());

    let page_result = Signal::derive(move || {
        let (page, limit) = state.with(|s| (s.page, s.limit));
        PageResult::normalize(handle.data.get(), page, limit)
    });
    let phase = Signal::derive(move || {
        let is_loading = handle.is_loading.get();
        handle.data.with(|data| {
            let count = data
                .as_ref()
                .and_then(|raw| raw.results.as_ref())
                .map_or(0, Vec::len);
            handle
                .error
                .with(|error| ListPhase::resolve(data.is_some(), is_loading, error.as_ref(), count))
        })
    });

    let toast = use_context::<ToastService>();
    let set_auth = use_context::<WriteSignal<AuthState>>();
    Effect::new(move |_| {
        let Some(error) = handle.error.get() else {
            return;
        };
        if let Some(toast) = toast {
            toast.error(error.user_message());
        }
        if error == FetchError::NotAuthenticated {
            if let Some(set_auth) = set_auth {
                logout(set_auth);
            }
        }
    });

    // Фильтры
    let declarations = Memo::new(move |_| state.with(|s| s.filters.declarations().to_vec()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filters_count()));
    let chips = Memo::new(move |_| state.with(|s| s.chips()));

    let filter_fields = move || {
        declarations
            .get()
            .into_iter()
            .map(|declaration| filter_field(state, declaration))
            .collect_view()
    };

    let date_fields = move || {
        date_ranges
            .iter()
            .map(|&kind| date_range_fields(state, kind))
            .collect_view()
    };

    let filter_tags = move || {
        chips
            .get()
            .into_iter()
            .map(|chip| {
                let target = chip.target;
                view! {
                    <FilterTag
                        label=chip.label
                        on_remove=Callback::new(move |_| {
                            state.update(|s| s.remove_chip(&target));
                        })
                    />
                }
            })
            .collect_view()
    };

    let body = move || match phase.get() {
        ListPhase::Idle => view! { <></> }.into_any(),
        ListPhase::Loading => view! {
            <div class="general-list__loading">
                <Spinner />
            </div>
        }
        .into_any(),
        ListPhase::Failed(error) => view! {
            <div class="general-list__error" role="alert">
                <span>{error.user_message()}</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| handle.refetch.run(())
                >
                    "تلاش دوباره"
                </Button>
            </div>
        }
        .into_any(),
        ListPhase::Empty => view! {
            <div class="general-list__empty">{empty_message.clone()}</div>
        }
        .into_any(),
        ListPhase::Loaded => page_result
            .get()
            .results
            .into_iter()
            .map(|item| render_item.run(item))
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="general-list" dir="rtl">
            <div class="general-list__header">
                <h2 class="general-list__title">{title}</h2>
                <SearchInput
                    value=search_input
                    on_input=Callback::new(move |text: String| {
                        state.update(|s| s.set_search_input(text));
                    })
                    placeholder=search_placeholder
                />
            </div>

            {move || (!declarations.with(|d| d.is_empty())).then(|| view! {
                <FilterPanel
                    title="فیلترها"
                    is_expanded=Signal::derive(move || state.with(|s| s.panels.is_open(SECTION_FILTERS)))
                    on_toggle=Callback::new(move |_| state.update(|s| s.toggle_panel(SECTION_FILTERS)))
                    active_filters_count=active_filters_count
                >
                    <div class="general-list__filters">{filter_fields}</div>
                </FilterPanel>
            })}

            {show_date_filter.then(|| view! {
                <FilterPanel
                    title="بازه تاریخ"
                    is_expanded=Signal::derive(move || state.with(|s| s.panels.is_open(SECTION_DATES)))
                    on_toggle=Callback::new(move |_| state.update(|s| s.toggle_panel(SECTION_DATES)))
                    active_filters_count=Signal::derive(move || state.with(|s| s.dates.active_count()))
                >
                    <div class="general-list__dates">{date_fields}</div>
                </FilterPanel>
            })}

            {move || (!chips.with(|c| c.is_empty())).then(|| view! {
                <div class="general-list__chips">
                    {filter_tags}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| state.update(|s| s.clear_all())
                    >
                        "پاک کردن همه"
                    </Button>
                </div>
            })}

            <div class="general-list__body">{body}</div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || page_result.with(|r| r.total_pages))
                total_count=Signal::derive(move || page_result.with(|r| r.total_results))
                on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
            />
        </div>
    }
}

/// Control of one declared filter
fn filter_field(state: RwSignal<ListState>, declaration: FilterDeclaration) -> AnyView {
    let key = declaration.query_param_key.clone();
    let set = move |value: FilterValue| state.update(|s| s.set_filter_value(&key, value));

    match declaration.kind {
        FilterKind::Search => {
            let key = declaration.query_param_key.clone();
            view! {
                <Input
                    label=declaration.label
                    value=Signal::derive(move || state.with(|s| s.filters.text(&key)))
                    on_input=Callback::new(move |text: String| set(FilterValue::Text(text)))
                />
            }
            .into_any()
        }
        FilterKind::Checkbox => {
            let key = declaration.query_param_key.clone();
            view! {
                <Checkbox
                    label=declaration.label
                    checked=Signal::derive(move || state.with(|s| s.filters.flag(&key)))
                    on_change=Callback::new(move |checked: bool| set(FilterValue::Flag(checked)))
                />
            }
            .into_any()
        }
        FilterKind::Options => {
            let key = declaration.query_param_key.clone();
            let options: Vec<(String, String)> = std::iter::once((ALL_OPTIONS.to_string(), "همه".to_string()))
                .chain(declaration.options.iter().map(|o| (o.clone(), o.clone())))
                .collect();
            view! {
                <Select
                    label=declaration.label
                    value=Signal::derive(move || state.with(|s| s.filters.text(&key)))
                    on_change=Callback::new(move |value: String| set(FilterValue::Text(value)))
                    options=options
                />
            }
            .into_any()
        }
    }
}

/// From/to pickers of one date range
fn date_range_fields(state: RwSignal<ListState>, kind: DateRangeKind) -> AnyView {
    let bound_input = move |bound: DateBound| {
        view! {
            <DateInput
                label=date_bound_label(bound)
                value=Signal::derive(move || state.with(|s| s.dates.range(kind).get(bound)))
                on_change=Callback::new(move |date| state.update(|s| s.set_date_bound(kind, bound, date)))
            />
        }
    };

    view! {
        <div class="date-range">
            <span class="date-range__title">{date_range_label(kind)}</span>
            {bound_input(DateBound::From)}
            {bound_input(DateBound::To)}
            {move || state.with(|s| s.dates.range(kind).is_reversed()).then(|| view! {
                <span class="date-range__warning">"تاریخ شروع بعد از تاریخ پایان است"</span>
            })}
        </div>
    }
    .into_any()
}
