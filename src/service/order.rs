use crate::{
    abstract_trait::{DynMenuQueryRepository, DynOrderCommandRepository, DynOrderQueryRepository},
    domain::responses::RowSet,
    errors::ServiceError,
    model::{ItemStatus, MenuItem, Order},
    session::Cart,
};
use tracing::info;

/// Order History shows at most this many past orders.
pub const HISTORY_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct OrderService {
    menu_query: DynMenuQueryRepository,
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
}

impl OrderService {
    pub fn new(
        menu_query: DynMenuQueryRepository,
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
    ) -> Self {
        Self {
            menu_query,
            query,
            command,
        }
    }

    pub async fn find_item(&self, name: &str) -> Result<Option<MenuItem>, ServiceError> {
        Ok(self.menu_query.find_by_name(name).await?)
    }

    pub async fn items_of_type(&self, item_type: &str) -> Result<Vec<MenuItem>, ServiceError> {
        Ok(self.menu_query.find_by_type(item_type).await?)
    }

    /// One transaction: the order row plus one item-status row per cart
    /// entry. An empty cart is refused rather than producing a
    /// zero-total order.
    pub async fn checkout(&self, login: &str, cart: &Cart) -> Result<Order, ServiceError> {
        if cart.is_empty() {
            return Err(ServiceError::Validation(vec![
                "cart is empty, nothing to check out".to_string(),
            ]));
        }

        let order = self.command.checkout(login, cart).await?;
        info!(
            "✅ Checked out order {} for {} ({} item(s))",
            order.order_id,
            login,
            cart.len()
        );
        Ok(order)
    }

    pub async fn history(&self, login: &str) -> Result<RowSet, ServiceError> {
        Ok(self.query.history(login, HISTORY_LIMIT).await?)
    }

    pub async fn order_items(&self, order_id: i32) -> Result<Vec<ItemStatus>, ServiceError> {
        Ok(self.query.items_for_order(order_id).await?)
    }

    pub async fn remove_order_item(
        &self,
        order_id: i32,
        item_name: &str,
    ) -> Result<u64, ServiceError> {
        let removed = self.command.remove_item(order_id, item_name).await?;
        info!("✅ Removed {removed} row(s) for {item_name} from order {order_id}");
        Ok(removed)
    }
}
