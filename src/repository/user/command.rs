use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Registration always produces a Customer with no favorites;
        // manager accounts are provisioned out of band.
        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (login, password, phonenum, favitems, type)
            VALUES ($1, $2, $3, '', 'Customer')
            RETURNING login, password, phonenum, favitems, type
            "#,
        )
        .bind(&req.login)
        .bind(&req.password)
        .bind(&req.phone_num)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create user {}: {e:?}", req.login);
            RepositoryError::from_write(e, &req.login)
        })?;

        info!("✅ Created user {}", user.login);
        Ok(user)
    }

    async fn update_login(
        &self,
        current_login: &str,
        new_login: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET login = $2
            WHERE login = $1
            RETURNING login, password, phonenum, favitems, type
            "#,
        )
        .bind(current_login)
        .bind(new_login)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update login for {current_login}: {e:?}");
            RepositoryError::from_write(e, new_login)
        })?;

        Ok(user)
    }

    async fn update_phone(
        &self,
        login: &str,
        phone_num: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET phonenum = $2
            WHERE login = $1
            RETURNING login, password, phonenum, favitems, type
            "#,
        )
        .bind(login)
        .bind(phone_num)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update phone for {login}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn update_password(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET password = $2
            WHERE login = $1
            RETURNING login, password, phonenum, favitems, type
            "#,
        )
        .bind(login)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update password for {login}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}
