use contracts::domain::a003_order::aggregate::Order;
use contracts::shared::list_query::ListQuery;

use crate::shared::api_utils::{list_endpoint, ListFuture};
use crate::shared::config::Config;
use crate::system::auth::context::AuthContext;

pub const ORDERS_PATH: &str = "/order";

/// `GET /order`, filtered by `status`, `paymentStatus` and `deliveryStatus`
pub fn list_orders(
    auth: AuthContext,
    config: Config,
) -> impl Fn(ListQuery) -> ListFuture<Order> + Clone + 'static {
    list_endpoint(auth, config, ORDERS_PATH)
}
