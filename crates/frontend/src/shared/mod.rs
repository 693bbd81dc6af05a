pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod general_list;
pub mod icons;
pub mod list_utils;
