pub mod list_query;
pub mod list_response;
pub mod pagination;
