//! MySQL implementation of the RefreshTokenStore trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use ba_core::errors::DomainError;
use ba_core::repositories::RefreshTokenStore;

use super::db_error;

/// Refresh token store backed by the `refresh_token_store` table
pub struct MySqlRefreshTokenStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenStore for MySqlRefreshTokenStore {
    async fn put(&self, token: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO refresh_token_store (refresh_token) VALUES (?)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to store refresh token", e))?;
        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM refresh_token_store WHERE refresh_token = ?)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check refresh token", e))?;

        Ok(exists != 0)
    }

    async fn delete(&self, token: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_token_store WHERE refresh_token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete refresh token", e))?;

        Ok(result.rows_affected())
    }
}
