use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::responses::RowSet,
    errors::RepositoryError,
    model::ItemStatus as ItemStatusModel,
    repository::executor::fetch_rowset,
};
use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn history(&self, login: &str, limit: i64) -> Result<RowSet, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = sqlx::query(
            r#"
            SELECT orderid, login, paid, timestamprecieved, total
            FROM orders
            WHERE login = $1
            GROUP BY orderid, timestamprecieved
            ORDER BY timestamprecieved DESC
            LIMIT $2
            "#,
        )
        .bind(login)
        .bind(limit);

        fetch_rowset(&mut *conn, query).await
    }

    async fn items_for_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<ItemStatusModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, ItemStatusModel>(
            r#"
            SELECT orderid, itemname, lastupdated, status, comments
            FROM itemstatus
            WHERE orderid = $1
            ORDER BY itemname
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
