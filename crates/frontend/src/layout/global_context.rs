use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the open page
const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the open page, see `layout::pages::registry`
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

/// Key of the page named in a location search string (`?page=a006_order`)
pub fn page_key_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(PAGE_PARAM)
        .filter(|key| !key.is_empty())
        .cloned()
}

/// Search string that reopens `key`
pub fn search_for_page_key(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(PAGE_PARAM, key)])).unwrap_or_default();
    format!("?{}", query)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the page from the URL and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = page_key_from_search(&search) {
            self.open_page(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let new_url = search_for_page_key(&key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open_page: '{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_round_trip_through_url() {
        assert_eq!(search_for_page_key("a006_order"), "?page=a006_order");
        assert_eq!(
            page_key_from_search("?page=a006_order").as_deref(),
            Some("a006_order")
        );
    }

    #[test]
    fn test_missing_or_empty_page_key() {
        assert_eq!(page_key_from_search(""), None);
        assert_eq!(page_key_from_search("?page="), None);
        assert_eq!(page_key_from_search("?active=a001_user"), None);
    }
}
