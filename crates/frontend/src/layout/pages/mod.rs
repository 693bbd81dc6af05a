//! Page management module
//!
//! Содержит:
//! - `registry` - маппинг page key → View и заголовки страниц

pub mod registry;

pub use registry::{page_label_for_key, render_page_content, DEFAULT_PAGE_KEY};
