//! Unit tests for authentication service

use chrono::Duration;

use crate::domain::entities::auth::{Auth, Role};
use crate::domain::entities::token::{AccessClaims, ClaimKind, ExpiryPolicy};
use crate::errors::{AuthError, DomainError, ErrorKind, TokenError, LOGOUT_FAILED_MESSAGE};
use crate::repositories::RefreshTokenStore;
use crate::services::token::TokenServiceConfig;

use super::mocks::{context, context_with, expired_alice_claims, token_config};

#[tokio::test]
async fn test_authenticate_issues_stored_pair() {
    let ctx = context().await;

    let pair = ctx.service.authenticate("alice", "wonderland").await.unwrap();

    let access = ctx
        .tokens
        .validate_access_token(&pair.access_token, ExpiryPolicy::Strict)
        .unwrap();
    assert_eq!(access.sub, "alice");
    assert_eq!(access.role, Role::User);
    assert_eq!(access.customer_id.as_deref(), Some("2000"));

    let refresh = ctx
        .tokens
        .validate_refresh_token(&pair.refresh_token, ExpiryPolicy::Strict)
        .unwrap();
    assert_eq!(refresh.sub, "alice");
    assert_eq!(refresh.iat, access.iat);
    assert!(ctx.store.exists(&pair.refresh_token).await.unwrap());
}

#[tokio::test]
async fn test_authenticate_hides_which_part_failed() {
    let ctx = context().await;

    let unknown = ctx.service.authenticate("nobody", "wonderland").await;
    let wrong = ctx.service.authenticate("alice", "looking-glass").await;

    assert_eq!(unknown, Err(DomainError::Auth(AuthError::IncorrectCredentials)));
    assert_eq!(unknown, wrong);
    assert_eq!(
        unknown.unwrap_err().public_message(),
        "Incorrect username or password"
    );
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_refresh_after_access_expiry() {
    let ctx = context_with(
        TokenServiceConfig {
            access_token_ttl: Duration::seconds(1),
            ..token_config()
        },
    )
    .await;

    let pair = ctx.service.authenticate("alice", "wonderland").await.unwrap();
    let old = ctx
        .tokens
        .validate_access_token(&pair.access_token, ExpiryPolicy::AllowExpired)
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(2100)).await;

    let new_token = ctx
        .service
        .refresh(&pair.access_token, &pair.refresh_token)
        .await
        .unwrap();
    let renewed = ctx
        .tokens
        .validate_access_token(&new_token, ExpiryPolicy::AllowExpired)
        .unwrap();

    assert_eq!(renewed.sub, old.sub);
    assert_eq!(renewed.role, old.role);
    assert_eq!(renewed.customer_id, old.customer_id);
    assert!(renewed.exp > old.exp);
    // no rotation: the old refresh token remains usable
    assert!(ctx.store.exists(&pair.refresh_token).await.unwrap());
}

#[tokio::test]
async fn test_refresh_with_hand_built_expired_access() {
    let ctx = context().await;
    let claims = expired_alice_claims();
    let access = ctx.tokens.sign_access_token(&claims).unwrap();
    let refresh = ctx.tokens.derive_refresh_token(&claims).unwrap();
    ctx.store.put(&refresh).await.unwrap();

    let new_token = ctx.service.refresh(&access, &refresh).await.unwrap();
    let renewed = ctx
        .tokens
        .validate_access_token(&new_token, ExpiryPolicy::Strict)
        .unwrap();

    assert_eq!(renewed.sub, "alice");
    assert!(renewed.exp > claims.exp);
}

#[tokio::test]
async fn test_refresh_rejects_live_access_token() {
    let ctx = context().await;
    let pair = ctx.service.authenticate("alice", "wonderland").await.unwrap();

    let result = ctx
        .service
        .refresh(&pair.access_token, &pair.refresh_token)
        .await;
    assert_eq!(result, Err(DomainError::Auth(AuthError::AccessTokenNotExpired)));

    // regardless of what the refresh token is
    let garbage = ctx.service.refresh(&pair.access_token, "garbage").await;
    assert_eq!(garbage, Err(DomainError::Auth(AuthError::AccessTokenNotExpired)));
}

#[tokio::test]
async fn test_refresh_requires_store_membership() {
    let ctx = context().await;
    let claims = expired_alice_claims();
    let access = ctx.tokens.sign_access_token(&claims).unwrap();
    let refresh = ctx.tokens.derive_refresh_token(&claims).unwrap();
    ctx.store.put(&refresh).await.unwrap();

    assert!(ctx.service.refresh(&access, &refresh).await.is_ok());

    ctx.store.delete(&refresh).await.unwrap();
    let result = ctx.service.refresh(&access, &refresh).await;
    assert_eq!(result, Err(DomainError::Auth(AuthError::RefreshTokenRevoked)));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_refresh_rejects_expired_refresh_token() {
    let ctx = context_with(TokenServiceConfig {
        refresh_token_ttl: Duration::hours(1),
        ..token_config()
    })
    .await;
    // issued two hours ago, so the derived refresh token is expired too
    let claims = expired_alice_claims();
    let access = ctx.tokens.sign_access_token(&claims).unwrap();
    let refresh = ctx.tokens.derive_refresh_token(&claims).unwrap();
    ctx.store.put(&refresh).await.unwrap();

    let result = ctx.service.refresh(&access, &refresh).await;
    assert_eq!(
        result,
        Err(DomainError::Token(TokenError::ExpiredToken {
            kind: ClaimKind::Refresh
        }))
    );
}

#[tokio::test]
async fn test_refresh_rejects_subject_mismatch() {
    let ctx = context().await;
    let access = ctx.tokens.sign_access_token(&expired_alice_claims()).unwrap();

    let admin = AccessClaims::new("admin", Role::Admin, None, Duration::minutes(15));
    let admin_refresh = ctx.tokens.derive_refresh_token(&admin).unwrap();
    ctx.store.put(&admin_refresh).await.unwrap();

    let result = ctx.service.refresh(&access, &admin_refresh).await;
    assert_eq!(result, Err(DomainError::Auth(AuthError::TokenSubjectMismatch)));
}

#[tokio::test]
async fn test_logout_is_not_idempotent() {
    let ctx = context().await;
    let pair = ctx.service.authenticate("alice", "wonderland").await.unwrap();

    ctx.service.logout(&pair.refresh_token).await.unwrap();
    assert!(!ctx.store.exists(&pair.refresh_token).await.unwrap());

    let second = ctx.service.logout(&pair.refresh_token).await.unwrap_err();
    assert_eq!(second.kind(), ErrorKind::Unexpected);
    assert_eq!(second.public_message(), LOGOUT_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_back_to_back_logins_are_separate_sessions() {
    let ctx = context().await;

    let first = ctx.service.authenticate("alice", "wonderland").await.unwrap();
    let second = ctx.service.authenticate("alice", "wonderland").await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(ctx.store.len().await, 2);

    ctx.service.logout(&first.refresh_token).await.unwrap();

    assert!(!ctx.store.exists(&first.refresh_token).await.unwrap());
    assert!(ctx.store.exists(&second.refresh_token).await.unwrap());
}

#[tokio::test]
async fn test_logout_rejects_duplicate_rows() {
    let ctx = context().await;
    let pair = ctx.service.authenticate("alice", "wonderland").await.unwrap();
    ctx.store.put(&pair.refresh_token).await.unwrap();

    let err = ctx.service.logout(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Invariant { .. }));
    assert_eq!(err.public_message(), LOGOUT_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_logout_accepts_expired_refresh_token() {
    let ctx = context_with(TokenServiceConfig {
        refresh_token_ttl: Duration::hours(1),
        ..token_config()
    })
    .await;
    let refresh = ctx
        .tokens
        .derive_refresh_token(&expired_alice_claims())
        .unwrap();
    ctx.store.put(&refresh).await.unwrap();

    assert!(ctx.service.logout(&refresh).await.is_ok());
}

#[tokio::test]
async fn test_logout_rejects_forged_token() {
    let ctx = context().await;
    let result = ctx.service.logout("not-a-token").await;
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_authorize() {
    let ctx = context().await;

    assert!(ctx
        .service
        .authorize("alice", Role::User, Some("2000"))
        .await
        .is_ok());
    assert!(ctx.service.authorize("admin", Role::Admin, None).await.is_ok());

    for (username, role, customer) in [
        ("alice", Role::User, Some("2001")),
        ("alice", Role::Admin, Some("2000")),
        ("nobody", Role::User, None),
    ] {
        let err = ctx
            .service
            .authorize(username, role, customer)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(err.public_message(), "Cannot continue");
    }
}

#[tokio::test]
async fn test_check_account_ownership() {
    let ctx = context().await;

    assert!(ctx
        .service
        .check_account_ownership("95470", "2000")
        .await
        .is_ok());

    let err = ctx
        .service
        .check_account_ownership("95470", "2001")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_new_user_can_authenticate() {
    let ctx = context().await;
    ctx.auth_repository
        .insert_user(Auth {
            username: "bob".to_string(),
            hashed_password: "hashed:builder123".to_string(),
            role: Role::User,
            customer_id: Some("2001".to_string()),
        })
        .await;

    assert!(ctx.service.authenticate("bob", "builder123").await.is_ok());
}
