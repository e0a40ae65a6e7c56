use crate::{
    abstract_trait::{DynMenuCommandRepository, DynMenuQueryRepository, DynUserQueryRepository},
    domain::{requests::CreateMenuItemRequest, responses::RowSet},
    errors::ServiceError,
    model::{MenuItem, Role},
};
use tracing::{info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct MenuService {
    user_query: DynUserQueryRepository,
    query: DynMenuQueryRepository,
    command: DynMenuCommandRepository,
}

impl MenuService {
    pub fn new(
        user_query: DynUserQueryRepository,
        query: DynMenuQueryRepository,
        command: DynMenuCommandRepository,
    ) -> Self {
        Self {
            user_query,
            query,
            command,
        }
    }

    /// Role looked up fresh from the store on every menu entry, so a
    /// revoked manager loses the privileged options on their next visit.
    pub async fn role_for(&self, login: &str) -> Result<Option<Role>, ServiceError> {
        let user_type = self.user_query.type_of(login).await?;
        Ok(user_type.map(|t| Role::from_type_column(&t)))
    }

    pub async fn listing(&self) -> Result<RowSet, ServiceError> {
        Ok(self.query.list_all().await?)
    }

    pub async fn search_by_name(&self, name: &str) -> Result<RowSet, ServiceError> {
        Ok(self.query.search_by_name(name).await?)
    }

    pub async fn search_by_type(&self, item_type: &str) -> Result<RowSet, ServiceError> {
        Ok(self.query.search_by_type(item_type).await?)
    }

    pub async fn add_item(
        &self,
        role: Role,
        req: &CreateMenuItemRequest,
    ) -> Result<MenuItem, ServiceError> {
        if !role.is_manager() {
            warn!("🔒 Non-manager attempted to add menu item {}", req.item_name);
            return Err(ServiceError::Forbidden(
                "only managers may add menu items".to_string(),
            ));
        }
        req.validate()?;

        let item = self.command.create_item(req).await?;
        info!("✅ Menu item {} added", item.item_name);
        Ok(item)
    }

    pub async fn delete_item(&self, role: Role, name: &str) -> Result<u64, ServiceError> {
        if !role.is_manager() {
            warn!("🔒 Non-manager attempted to delete menu item {name}");
            return Err(ServiceError::Forbidden(
                "only managers may delete menu items".to_string(),
            ));
        }

        let removed = self.command.delete_item(name).await?;
        info!("✅ Deleted {removed} menu row(s) named {name}");
        Ok(removed)
    }
}
