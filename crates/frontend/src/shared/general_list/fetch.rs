//! Fetch-hook contract between a list and its data source.
//!
//! A list never talks to the network itself: the page hands it a
//! [`DataQuery`], the list hands back the current [`QueryParams`] and renders
//! whatever the returned [`QueryHandle`] reports. Retries, caching and
//! deduplication belong to the implementation, not to the list.

use crate::shared::api_utils::fetch_page;
use crate::shared::error::FetchError;
use contracts::shared::list_query::QueryParams;
use contracts::shared::paging::RawPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Reactive view of one query.
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub data: Signal<Option<RawPage<T>>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<FetchError>>,
    /// Re-runs the query with the current parameters
    pub refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

/// Data source of a list.
pub trait DataQuery<T: Send + Sync + 'static>: Send + Sync + 'static {
    /// Called once per list instance; must follow `params` reactively.
    fn use_query(&self, params: Signal<QueryParams>) -> QueryHandle<T>;
}

/// Sequence numbers and in-flight count of the requests of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
    in_flight: u32,
}

impl RequestTracker {
    /// Registers a new request; it supersedes every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.in_flight += 1;
        self.latest
    }

    /// Marks `request_id` as answered. `true` when it is the latest request,
    /// i.e. its response may be shown.
    pub fn finish(&mut self, request_id: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        request_id == self.latest
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// REST list endpoint, e.g. `Endpoint::<UserDto>::new("/users")`.
///
/// Re-fetches whenever the parameters change. Responses that arrive after a
/// newer request was issued are dropped.
pub struct Endpoint<T> {
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Endpoint<T> {}

impl<T> DataQuery<T> for Endpoint<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    fn use_query(&self, params: Signal<QueryParams>) -> QueryHandle<T> {
        let path = self.path;
        let data = RwSignal::new(None::<RawPage<T>>);
        let error = RwSignal::new(None::<FetchError>);
        let requests = RwSignal::new(RequestTracker::default());

        let run = move |query: QueryParams| {
            let Some(request_id) = requests.try_update(|r| r.begin()) else {
                return;
            };

            spawn_local(async move {
                let result = fetch_page::<T>(path, &query).await;

                if requests.try_update(|r| r.finish(request_id)) != Some(true) {
                    log::debug!("{}: dropping stale response #{}", path, request_id);
                    return;
                }
                match result {
                    Ok(page) => {
                        let _ = error.try_set(None);
                        let _ = data.try_set(Some(page));
                    }
                    Err(e) => {
                        log::warn!("{}: fetch failed: {}", path, e);
                        let _ = error.try_set(Some(e));
                    }
                }
            });
        };

        Effect::new(move |_| {
            let query = params.get();
            log::debug!("{}: query {:?}", path, query);
            run(query);
        });

        QueryHandle {
            data: data.into(),
            is_loading: Signal::derive(move || requests.with(RequestTracker::is_loading)),
            error: error.into(),
            refetch: Callback::new(move |_| run(params.get_untracked())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_responses() {
        let mut requests = RequestTracker::default();
        let first = requests.begin();
        let second = requests.begin();
        assert_eq!(requests.in_flight(), 2);
        assert!(requests.is_loading());

        assert!(requests.finish(second));
        assert!(requests.is_loading());
        assert!(!requests.finish(first));

        assert_eq!(requests.in_flight(), 0);
        assert!(!requests.is_loading());
    }

    #[test]
    fn test_in_order_responses() {
        let mut requests = RequestTracker::default();
        let first = requests.begin();
        assert!(requests.finish(first));
        let refetch = requests.begin();
        assert!(requests.finish(refetch));
        assert_eq!(requests, RequestTracker { latest: 2, in_flight: 0 });
    }
}
