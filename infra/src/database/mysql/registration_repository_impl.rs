//! MySQL implementation of the RegistrationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use ba_core::domain::entities::auth::Role;
use ba_core::domain::entities::registration::Registration;
use ba_core::errors::{DomainError, RegistrationError};
use ba_core::repositories::RegistrationRepository;

use super::db_error;

/// Name of the unique key on `registrations.username`
const USERNAME_KEY: &str = "uq_registrations_username";

const SELECT_REGISTRATION: &str = r#"
    SELECT email, username, name, country, zipcode, date_of_birth, password,
           date_registered, date_last_emailed, date_confirmed, customer_id
    FROM registrations
"#;

/// MySQL implementation of RegistrationRepository
pub struct MySqlRegistrationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRegistrationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_registration(row: &sqlx::mysql::MySqlRow) -> Result<Registration, DomainError> {
        Ok(Registration {
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            username: row
                .try_get("username")
                .map_err(|e| db_error("Failed to get username", e))?,
            full_name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            country: row
                .try_get("country")
                .map_err(|e| db_error("Failed to get country", e))?,
            zipcode: row
                .try_get("zipcode")
                .map_err(|e| db_error("Failed to get zipcode", e))?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| db_error("Failed to get date_of_birth", e))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| db_error("Failed to get password", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("date_registered")
                .map_err(|e| db_error("Failed to get date_registered", e))?,
            last_emailed_at: row
                .try_get::<Option<DateTime<Utc>>, _>("date_last_emailed")
                .map_err(|e| db_error("Failed to get date_last_emailed", e))?,
            confirmed_at: row
                .try_get::<Option<DateTime<Utc>>, _>("date_confirmed")
                .map_err(|e| db_error("Failed to get date_confirmed", e))?,
            customer_id: row
                .try_get::<Option<i64>, _>("customer_id")
                .map_err(|e| db_error("Failed to get customer_id", e))?
                .map(|id| id.to_string()),
        })
    }

    fn parse_customer_id(customer_id: Option<&str>) -> Result<Option<i64>, DomainError> {
        customer_id
            .map(|id| {
                id.parse::<i64>()
                    .map_err(|e| DomainError::internal(format!("invalid customer id {id}: {e}")))
            })
            .transpose()
    }
}

/// Map a duplicate-key failure on insert to the uniqueness error it stands for
fn map_insert_error(error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &error {
        if db_err.is_unique_violation() {
            return if db_err.message().contains(USERNAME_KEY) {
                RegistrationError::UsernameTaken.into()
            } else {
                RegistrationError::EmailAlreadyUsed.into()
            };
        }
    }
    db_error("Failed to save registration", error)
}

#[async_trait]
impl RegistrationRepository for MySqlRegistrationRepository {
    async fn is_email_used(&self, email: &str) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT EXISTS(SELECT 1 FROM registrations WHERE email = ?)
                OR EXISTS(SELECT 1 FROM customers WHERE email = ?)
            "#,
        )
        .bind(email)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check email", e))?;

        Ok(exists != 0)
    }

    async fn is_username_taken(&self, username: &str) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)
                OR EXISTS(SELECT 1 FROM registrations WHERE username = ?)
            "#,
        )
        .bind(username)
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check username", e))?;

        Ok(exists != 0)
    }

    async fn save(&self, registration: &Registration) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO registrations (
                email, username, name, country, zipcode, date_of_birth, password,
                date_registered
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&registration.email)
            .bind(&registration.username)
            .bind(&registration.full_name)
            .bind(&registration.country)
            .bind(&registration.zipcode)
            .bind(registration.date_of_birth)
            .bind(&registration.password_hash)
            .bind(registration.created_at)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError> {
        let query = format!("{SELECT_REGISTRATION} WHERE email = ?");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find registration", e))?;

        row.as_ref().map(Self::row_to_registration).transpose()
    }

    async fn update_last_emailed(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE registrations SET date_last_emailed = ? WHERE email = ?")
            .bind(at)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update last emailed time", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistrationError::NotFound.into());
        }
        Ok(())
    }

    async fn create_necessary_accounts(
        &self,
        registration: &Registration,
    ) -> Result<String, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let customer = sqlx::query(
            r#"
            INSERT INTO customers (name, country, zipcode, date_of_birth, email, status)
            VALUES (?, ?, ?, ?, ?, 1)
            "#,
        )
        .bind(&registration.full_name)
        .bind(&registration.country)
        .bind(&registration.zipcode)
        .bind(registration.date_of_birth)
        .bind(&registration.email)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to create customer", e))?;

        let customer_id = customer.last_insert_id();

        sqlx::query(
            r#"
            INSERT INTO users (username, password, role, customer_id, created_on)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&registration.username)
        .bind(&registration.password_hash)
        .bind(Role::User.as_str())
        .bind(customer_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to create user", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit account creation", e))?;

        tracing::info!(
            username = %registration.username,
            customer_id,
            "Accounts created for registration"
        );
        Ok(customer_id.to_string())
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        let customer_id = Self::parse_customer_id(registration.customer_id.as_deref())?;

        let result = sqlx::query(
            r#"
            UPDATE registrations
            SET date_last_emailed = ?, date_confirmed = ?, customer_id = ?
            WHERE email = ?
            "#,
        )
        .bind(registration.last_emailed_at)
        .bind(registration.confirmed_at)
        .bind(customer_id)
        .bind(&registration.email)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update registration", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistrationError::NotFound.into());
        }
        Ok(())
    }
}
