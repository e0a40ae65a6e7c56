use crate::{
    abstract_trait::DynUserCommandRepository,
    domain::requests::{ProfileField, UpdateProfileRequest},
    errors::ServiceError,
    model::User,
};
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct ProfileService {
    command: DynUserCommandRepository,
}

impl ProfileService {
    pub fn new(command: DynUserCommandRepository) -> Self {
        Self { command }
    }

    /// Targeted update of one profile column, keyed on the session's
    /// login. Returns the row as stored after the update.
    pub async fn update(&self, req: &UpdateProfileRequest) -> Result<User, ServiceError> {
        req.validate()?;

        let updated = match req.field {
            ProfileField::Login => self.command.update_login(&req.login, &req.value).await?,
            ProfileField::Phone => self.command.update_phone(&req.login, &req.value).await?,
            ProfileField::Password => self.command.update_password(&req.login, &req.value).await?,
        };

        let user = updated.ok_or_else(|| ServiceError::NotFound(req.login.clone()))?;
        info!("✅ Updated {:?} for {}", req.field, user.login);
        Ok(user)
    }
}
