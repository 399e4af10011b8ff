//! Integration tests for the MySQL repositories
//!
//! These run against the database named by `DATABASE_URL` with the tables
//! described in the database module, and are ignored by default.

use chrono::{Duration, NaiveDate, Utc};

use ba_core::domain::entities::auth::Role;
use ba_core::domain::entities::registration::Registration;
use ba_core::errors::{DomainError, RegistrationError};
use ba_core::repositories::{AuthRepository, RefreshTokenStore, RegistrationRepository};
use ba_shared::config::DatabaseConfig;

use crate::database::{
    DatabasePool, MySqlAuthRepository, MySqlRefreshTokenStore, MySqlRegistrationRepository,
};

async fn pool() -> DatabasePool {
    DatabasePool::new(&DatabaseConfig::from_env().with_max_connections(2))
        .await
        .unwrap()
}

fn unique_suffix() -> String {
    Utc::now().timestamp_nanos_opt().unwrap_or_default().to_string()
}

fn registration(suffix: &str) -> Registration {
    let now = Utc::now();
    Registration {
        email: format!("it-{suffix}@example.test"),
        username: format!("it_{suffix}"),
        full_name: "Integration Test".to_string(),
        country: "UK".to_string(),
        zipcode: "OX1 1DP".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 4).unwrap(),
        password_hash: "$2b$04$invalidinvalidinvalidinvalidinvalidinvalidinvalidinv".to_string(),
        created_at: now - Duration::seconds(1),
        last_emailed_at: None,
        confirmed_at: None,
        customer_id: None,
    }
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_refresh_token_store_round_trip() {
    let store = MySqlRefreshTokenStore::new(pool().await.get_pool().clone());
    let token = format!("it-token-{}", unique_suffix());

    store.put(&token).await.unwrap();
    assert!(store.exists(&token).await.unwrap());
    assert_eq!(store.delete(&token).await.unwrap(), 1);
    assert_eq!(store.delete(&token).await.unwrap(), 0);
    assert!(!store.exists(&token).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_registration_lifecycle() {
    let pool = pool().await;
    let repo = MySqlRegistrationRepository::new(pool.get_pool().clone());
    let auth = MySqlAuthRepository::new(pool.get_pool().clone());
    let suffix = unique_suffix();
    let reg = registration(&suffix);

    repo.save(&reg).await.unwrap();
    assert!(repo.is_email_used(&reg.email).await.unwrap());
    assert!(repo.is_username_taken(&reg.username).await.unwrap());

    let duplicate = repo.save(&reg).await;
    assert_eq!(
        duplicate,
        Err(DomainError::Registration(RegistrationError::EmailAlreadyUsed))
    );

    let mut same_username = registration(&suffix);
    same_username.email = format!("other-{suffix}@example.test");
    assert_eq!(
        repo.save(&same_username).await,
        Err(DomainError::Registration(RegistrationError::UsernameTaken))
    );

    repo.update_last_emailed(&reg.email, Utc::now()).await.unwrap();

    let stored = repo.find_by_email(&reg.email).await.unwrap().unwrap();
    assert!(stored.last_emailed_at.is_some());

    let customer_id = repo.create_necessary_accounts(&stored).await.unwrap();
    repo.update(&stored.confirm(customer_id.clone(), Utc::now()))
        .await
        .unwrap();

    let confirmed = repo.find_by_email(&reg.email).await.unwrap().unwrap();
    assert!(confirmed.is_confirmed());
    assert_eq!(confirmed.customer_id.as_deref(), Some(customer_id.as_str()));

    assert!(auth
        .user_exists(&reg.username, Role::User, Some(&customer_id))
        .await
        .unwrap());
    let user = auth.find_by_username(&reg.username).await.unwrap().unwrap();
    assert_eq!(user.customer_id, Some(customer_id));
}
