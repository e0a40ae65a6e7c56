use crate::{
    domain::responses::RowSet,
    errors::RepositoryError,
    model::{ItemStatus as ItemStatusModel, Order as OrderModel},
    session::Cart,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Most recent orders for a user, capped at `limit`.
    async fn history(&self, login: &str, limit: i64) -> Result<RowSet, RepositoryError>;
    async fn items_for_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<ItemStatusModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Atomically creates the order row plus one item-status row per
    /// cart entry, returning the stored order.
    async fn checkout(&self, login: &str, cart: &Cart) -> Result<OrderModel, RepositoryError>;
    /// Removes one item from an order; returns the number of rows removed.
    async fn remove_item(&self, order_id: i32, item_name: &str) -> Result<u64, RepositoryError>;
}
