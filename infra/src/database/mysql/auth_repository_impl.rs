//! MySQL implementation of the AuthRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ba_core::domain::entities::auth::{Auth, Role};
use ba_core::errors::DomainError;
use ba_core::repositories::AuthRepository;

use super::db_error;

/// MySQL implementation of AuthRepository over the `users` and `accounts` tables
pub struct MySqlAuthRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAuthRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_auth(row: &sqlx::mysql::MySqlRow) -> Result<Auth, DomainError> {
        let role: String = row
            .try_get("role")
            .map_err(|e| db_error("Failed to get role", e))?;
        let role = role.parse::<Role>().map_err(|e| {
            tracing::error!(role = %role, "Unknown role in users table");
            DomainError::internal(e)
        })?;

        Ok(Auth {
            username: row
                .try_get("username")
                .map_err(|e| db_error("Failed to get username", e))?,
            hashed_password: row
                .try_get("password")
                .map_err(|e| db_error("Failed to get password", e))?,
            role,
            customer_id: row
                .try_get::<Option<i64>, _>("customer_id")
                .map_err(|e| db_error("Failed to get customer_id", e))?
                .map(|id| id.to_string()),
        })
    }
}

#[async_trait]
impl AuthRepository for MySqlAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Auth>, DomainError> {
        let query = r#"
            SELECT username, password, role, customer_id
            FROM users
            WHERE username = ?
        "#;

        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query user", e))?;

        row.as_ref().map(Self::row_to_auth).transpose()
    }

    async fn user_exists(
        &self,
        username: &str,
        role: Role,
        customer_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let exists: i64 = match customer_id {
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? AND role = ? AND customer_id IS NULL)",
                )
                .bind(username)
                .bind(role.as_str())
                .fetch_one(&self.pool)
                .await
            }
            Some(customer_id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? AND role = ? AND customer_id = ?)",
                )
                .bind(username)
                .bind(role.as_str())
                .bind(customer_id)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("Failed to check user existence", e))?;

        Ok(exists != 0)
    }

    async fn is_account_under_customer(
        &self,
        account_id: &str,
        customer_id: &str,
    ) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE customer_id = ? AND account_id = ?)",
        )
        .bind(customer_id)
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check account ownership", e))?;

        Ok(exists != 0)
    }
}
