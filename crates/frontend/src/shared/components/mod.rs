pub mod custom_pagination;
pub mod list_state;
