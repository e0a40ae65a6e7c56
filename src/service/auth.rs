use crate::{
    abstract_trait::{DynUserCommandRepository, DynUserQueryRepository},
    domain::requests::{CreateUserRequest, LoginRequest},
    errors::ServiceError,
    model::User,
};
use tracing::{info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

impl AuthService {
    pub fn new(query: DynUserQueryRepository, command: DynUserCommandRepository) -> Self {
        Self { query, command }
    }

    pub async fn register(&self, req: &CreateUserRequest) -> Result<User, ServiceError> {
        req.validate()?;

        let user = self.command.create_user(req).await?;
        info!("✅ Registered user {}", user.login);
        Ok(user)
    }

    /// Returns the authenticated login, or `None` for a credential
    /// mismatch. A failed login is an answer, not an error.
    pub async fn login(&self, req: &LoginRequest) -> Result<Option<String>, ServiceError> {
        req.validate()?;

        let matches = self
            .query
            .count_by_credentials(&req.login, &req.password)
            .await?;

        if matches > 0 {
            info!("✅ Authenticated {}", req.login);
            Ok(Some(req.login.clone()))
        } else {
            warn!("🔒 Failed login attempt for {}", req.login);
            Ok(None)
        }
    }
}
