use crate::{
    abstract_trait::MenuQueryRepositoryTrait,
    config::ConnectionPool,
    domain::responses::RowSet,
    errors::RepositoryError,
    model::MenuItem as MenuItemModel,
    repository::executor::fetch_rowset,
};
use async_trait::async_trait;
use tracing::error;

pub struct MenuQueryRepository {
    db: ConnectionPool,
}

impl MenuQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuQueryRepositoryTrait for MenuQueryRepository {
    async fn list_all(&self) -> Result<RowSet, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query =
            sqlx::query("SELECT itemname, type, description, price FROM menu ORDER BY itemname");
        fetch_rowset(&mut *conn, query).await
    }

    async fn search_by_name(&self, name: &str) -> Result<RowSet, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query =
            sqlx::query("SELECT itemname, type, description, price FROM menu WHERE itemname = $1")
                .bind(name);
        fetch_rowset(&mut *conn, query).await
    }

    async fn search_by_type(&self, item_type: &str) -> Result<RowSet, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = sqlx::query(
            "SELECT itemname, type, description, price FROM menu WHERE type = $1 ORDER BY itemname",
        )
        .bind(item_type);
        fetch_rowset(&mut *conn, query).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, MenuItemModel>(
            r#"
            SELECT itemname, type, price, description, imageurl
            FROM menu
            WHERE itemname = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch menu item {name}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn find_by_type(&self, item_type: &str) -> Result<Vec<MenuItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, MenuItemModel>(
            r#"
            SELECT itemname, type, price, description, imageurl
            FROM menu
            WHERE type = $1
            ORDER BY itemname
            "#,
        )
        .bind(item_type)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch menu items of type {item_type}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
