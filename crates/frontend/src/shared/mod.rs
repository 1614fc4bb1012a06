pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod smart_fetch;
