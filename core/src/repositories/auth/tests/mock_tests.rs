//! Unit tests for mock auth repository

use crate::domain::entities::auth::{Auth, Role};
use crate::repositories::auth::{AuthRepository, MockAuthRepository};

fn customer_user() -> Auth {
    Auth {
        username: "alice".to_string(),
        hashed_password: "hash".to_string(),
        role: Role::User,
        customer_id: Some("2001".to_string()),
    }
}

#[tokio::test]
async fn test_find_by_username() {
    let repo = MockAuthRepository::new();
    repo.insert_user(customer_user()).await;

    let found = repo.find_by_username("alice").await.unwrap();
    assert_eq!(found.map(|a| a.role), Some(Role::User));
    assert!(repo.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_exists_matches_customer() {
    let repo = MockAuthRepository::new();
    repo.insert_user(customer_user()).await;

    assert!(repo.user_exists("alice", Role::User, Some("2001")).await.unwrap());
    assert!(!repo.user_exists("alice", Role::User, Some("2002")).await.unwrap());
    assert!(!repo.user_exists("alice", Role::Admin, Some("2001")).await.unwrap());
    // no customer filter only matches users without a customer
    assert!(!repo.user_exists("alice", Role::User, None).await.unwrap());
}

#[tokio::test]
async fn test_account_ownership() {
    let repo = MockAuthRepository::new();
    repo.insert_account("2001", "95470").await;

    assert!(repo.is_account_under_customer("95470", "2001").await.unwrap());
    assert!(!repo.is_account_under_customer("95470", "2002").await.unwrap());
}
