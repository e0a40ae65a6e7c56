use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel, repository::executor::row_count,
};
use async_trait::async_trait;
use tracing::error;

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT login, password, phonenum, favitems, type
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user {login}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn count_by_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<usize, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Plaintext equality at the store level is the login contract.
        let query = sqlx::query("SELECT login FROM users WHERE login = $1 AND password = $2")
            .bind(login)
            .bind(password);

        row_count(&mut *conn, query).await.map_err(|e| {
            error!("❌ Failed to check credentials for {login}: {e:?}");
            e
        })
    }

    async fn type_of(&self, login: &str) -> Result<Option<String>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user_type: Option<String> =
            sqlx::query_scalar("SELECT type FROM users WHERE login = $1")
                .bind(login)
                .fetch_optional(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(user_type)
    }
}
