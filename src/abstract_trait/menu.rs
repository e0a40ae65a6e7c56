use crate::{
    domain::{requests::CreateMenuItemRequest, responses::RowSet},
    errors::RepositoryError,
    model::MenuItem as MenuItemModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMenuQueryRepository = Arc<dyn MenuQueryRepositoryTrait + Send + Sync>;
pub type DynMenuCommandRepository = Arc<dyn MenuCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MenuQueryRepositoryTrait {
    /// Full listing of the printable menu columns.
    async fn list_all(&self) -> Result<RowSet, RepositoryError>;
    async fn search_by_name(&self, name: &str) -> Result<RowSet, RepositoryError>;
    async fn search_by_type(&self, item_type: &str) -> Result<RowSet, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItemModel>, RepositoryError>;
    async fn find_by_type(&self, item_type: &str) -> Result<Vec<MenuItemModel>, RepositoryError>;
}

#[async_trait]
pub trait MenuCommandRepositoryTrait {
    async fn create_item(
        &self,
        req: &CreateMenuItemRequest,
    ) -> Result<MenuItemModel, RepositoryError>;
    /// Returns the number of rows removed.
    async fn delete_item(&self, name: &str) -> Result<u64, RepositoryError>;
}
