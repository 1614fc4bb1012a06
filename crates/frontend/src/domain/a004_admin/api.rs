use contracts::domain::a004_admin::aggregate::Admin;
use contracts::shared::list_query::{ListFilters, ListQuery};

use crate::shared::api_utils::{list_endpoint, ListFuture};
use crate::shared::config::Config;
use crate::system::auth::context::AuthContext;

pub const ADMINS_PATH: &str = "/admin";

/// Fixed options of the admin list; every request asks for `role=admin`
pub fn admin_options() -> ListFilters {
    ListFilters {
        role: Some("admin".to_string()),
        ..Default::default()
    }
}

pub fn list_admins(
    auth: AuthContext,
    config: Config,
) -> impl Fn(ListQuery) -> ListFuture<Admin> + Clone + 'static {
    list_endpoint(auth, config, ADMINS_PATH)
}
