use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::Order as OrderModel,
    repository::executor::current_sequence_value,
    session::Cart,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

const ORDER_ID_SEQUENCE: &str = "orders_orderid_seq";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn checkout(&self, login: &str, cart: &Cart) -> Result<OrderModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let received_at = Utc::now().naive_utc();
        let total = cart.total();

        sqlx::query(
            r#"
            INSERT INTO orders (login, paid, timestamprecieved, total)
            VALUES ($1, FALSE, $2, $3)
            "#,
        )
        .bind(login)
        .bind(received_at)
        .bind(total)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order for {login}: {e:?}");
            RepositoryError::from_write(e, login)
        })?;

        // The id comes from the store's sequence; currval is read on the
        // transaction's connection, where the insert just advanced it.
        let order_id = current_sequence_value(&mut *tx, ORDER_ID_SEQUENCE).await? as i32;

        for item in cart.items() {
            sqlx::query(
                r#"
                INSERT INTO itemstatus (orderid, itemname, lastupdated, status, comments)
                VALUES ($1, $2, $3, 'Not Shipped', 'NONE')
                "#,
            )
            .bind(order_id)
            .bind(&item.name)
            .bind(received_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert item status {}: {e:?}", item.name);
                RepositoryError::from_write(e, &item.name)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Order {order_id} submitted for {login}, total {total}");
        Ok(OrderModel {
            order_id,
            login: login.to_string(),
            paid: false,
            received_at,
            total,
        })
    }

    async fn remove_item(&self, order_id: i32, item_name: &str) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM itemstatus WHERE orderid = $1 AND itemname = $2")
            .bind(order_id)
            .bind(item_name)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to remove {item_name} from order {order_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
