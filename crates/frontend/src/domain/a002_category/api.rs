use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::list_query::ListQuery;

use crate::shared::api_utils::{list_endpoint, ListFuture};
use crate::shared::config::Config;
use crate::system::auth::context::AuthContext;

pub const CATEGORIES_PATH: &str = "/category";

pub fn list_categories(
    auth: AuthContext,
    config: Config,
) -> impl Fn(ListQuery) -> ListFuture<Category> + Clone + 'static {
    list_endpoint(auth, config, CATEGORIES_PATH)
}
