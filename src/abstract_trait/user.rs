use crate::{
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_login(&self, login: &str) -> Result<Option<UserModel>, RepositoryError>;
    /// Number of rows matching the login/password pair; any positive
    /// count authenticates.
    async fn count_by_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<usize, RepositoryError>;
    /// Raw value of the `type` column, `None` when no such user exists.
    async fn type_of(&self, login: &str) -> Result<Option<String>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
    async fn update_login(
        &self,
        current_login: &str,
        new_login: &str,
    ) -> Result<Option<UserModel>, RepositoryError>;
    async fn update_phone(
        &self,
        login: &str,
        phone_num: &str,
    ) -> Result<Option<UserModel>, RepositoryError>;
    async fn update_password(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<UserModel>, RepositoryError>;
}
