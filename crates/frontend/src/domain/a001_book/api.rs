use contracts::domain::a001_book::aggregate::Book;
use contracts::shared::list_query::ListQuery;

use crate::shared::api_utils::{list_endpoint, ListFuture};
use crate::shared::config::Config;
use crate::system::auth::context::AuthContext;

pub const BOOKS_PATH: &str = "/book";

/// `GET /book`, filtered by `searchTerm` and `category`
pub fn list_books(
    auth: AuthContext,
    config: Config,
) -> impl Fn(ListQuery) -> ListFuture<Book> + Clone + 'static {
    list_endpoint(auth, config, BOOKS_PATH)
}
