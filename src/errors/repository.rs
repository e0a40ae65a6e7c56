use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

impl RepositoryError {
    /// Maps a write failure onto the constraint that caused it, keeping
    /// the plain sqlx error for everything else.
    pub fn from_write(err: SqlxError, entity: &str) -> Self {
        if let SqlxError::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some("23505") => return Self::AlreadyExists(entity.to_string()),
                Some("23503") => return Self::ForeignKey(entity.to_string()),
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}
