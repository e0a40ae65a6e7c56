use crate::{
    abstract_trait::MenuCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateMenuItemRequest, errors::RepositoryError,
    model::MenuItem as MenuItemModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct MenuCommandRepository {
    db: ConnectionPool,
}

impl MenuCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuCommandRepositoryTrait for MenuCommandRepository {
    async fn create_item(
        &self,
        req: &CreateMenuItemRequest,
    ) -> Result<MenuItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, MenuItemModel>(
            r#"
            INSERT INTO menu (itemname, type, price, description, imageurl)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING itemname, type, price, description, imageurl
            "#,
        )
        .bind(&req.item_name)
        .bind(&req.item_type)
        .bind(req.price)
        .bind(&req.description)
        .bind(&req.image_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create menu item {}: {e:?}", req.item_name);
            RepositoryError::from_write(e, &req.item_name)
        })?;

        info!("✅ Created menu item {}", item.item_name);
        Ok(item)
    }

    async fn delete_item(&self, name: &str) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM menu WHERE itemname = $1")
            .bind(name)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete menu item {name}: {e:?}");
                RepositoryError::from_write(e, name)
            })?;

        Ok(result.rows_affected())
    }
}
