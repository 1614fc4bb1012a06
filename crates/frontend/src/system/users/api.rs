use contracts::shared::list_query::{ListFilters, ListQuery};
use contracts::system::users::User;

use crate::shared::api_utils::{list_endpoint, ListFuture};
use crate::shared::config::Config;
use crate::system::auth::context::AuthContext;

pub const USERS_PATH: &str = "/user";

/// Customers only; staff accounts are listed on the admin screen
pub fn user_options() -> ListFilters {
    ListFilters {
        role: Some("user".to_string()),
        ..Default::default()
    }
}

pub fn list_users(
    auth: AuthContext,
    config: Config,
) -> impl Fn(ListQuery) -> ListFuture<User> + Clone + 'static {
    list_endpoint(auth, config, USERS_PATH)
}
