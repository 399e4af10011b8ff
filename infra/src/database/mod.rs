//! Database module - MySQL implementations using SQLx
//!
//! Expected tables:
//! - `users (username PK, password, role, customer_id NULL, created_on)`
//! - `refresh_token_store (refresh_token)`
//! - `accounts (account_id PK, customer_id, ...)`
//! - `customers (customer_id AUTO_INCREMENT PK, name, country, zipcode, date_of_birth, email, status)`
//! - `registrations (email PK, username UNIQUE KEY uq_registrations_username, name, country,
//!   zipcode, date_of_birth, password, date_registered, date_last_emailed NULL,
//!   date_confirmed NULL, customer_id NULL)`

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlAuthRepository, MySqlRefreshTokenStore, MySqlRegistrationRepository};
