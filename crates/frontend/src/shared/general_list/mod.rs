//! Server-driven list shared by every back-office entity page.

pub mod date_range;
pub mod debounce;
pub mod fetch;
pub mod filters;
pub mod query;
pub mod state;
pub mod view;

pub use fetch::{DataQuery, Endpoint, QueryHandle};
pub use view::GeneralList;
