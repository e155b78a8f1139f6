mod common;

use common::TestContext;
use core_auth::types::{error::AppError, user::NewUser};

#[actix_web::test]
async fn test_create_user_normalizes_email() {
    let ctx = TestContext::new().await;

    let user = ctx.db
        .create_user(NewUser {
            email: " Mixed.Case@Example.COM ".into(),
            password: "test123".into(),
            name: "Mixed".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user.email, "mixed.case@example.com");
    assert_eq!(ctx.db.get_user_by_email("MIXED.CASE@example.com").await.unwrap().id, user.id);
}

#[actix_web::test]
async fn test_create_superuser_sets_flags() {
    let ctx = TestContext::new().await;

    let admin = ctx.db.create_superuser("admin@gmail.com", "admin123").await.unwrap();

    assert!(admin.is_staff);
    assert!(admin.is_superuser);
    assert!(admin.is_active);
    assert!(ctx.db.check_password(&admin, "admin123"));
}

#[actix_web::test]
async fn test_create_superuser_validates_password() {
    let ctx = TestContext::new().await;

    let err = ctx.db.create_superuser("admin@gmail.com", "abc").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(!ctx.db.user_exists_by_email("admin@gmail.com").await.unwrap());
}

#[actix_web::test]
async fn test_get_unknown_user_is_not_found() {
    let ctx = TestContext::new().await;

    let err = ctx.db.get_user_by_email("nobody@gmail.com").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[actix_web::test]
async fn test_check_password_rejects_empty() {
    let ctx = TestContext::new().await;

    let user = ctx.db.create_superuser("admin@gmail.com", "admin123").await.unwrap();
    assert!(!ctx.db.check_password(&user, ""));
    assert!(!ctx.db.check_password(&user, "admin124"));
}

#[actix_web::test]
async fn test_failed_login_leaves_no_token() {
    let ctx = TestContext::new().await;

    let user = ctx.db.create_superuser("admin@gmail.com", "admin123").await.unwrap();

    for (email, password) in [("admin@gmail.com", "wrong"), ("admin@gmail.com", ""), ("", "admin123")] {
        let err = ctx.db.issue_token(email, password).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }
    assert!(!ctx.db.has_token(&user.id).await.unwrap());
}

#[actix_web::test]
async fn test_concurrent_duplicate_signup_is_a_validation_error() {
    let ctx = TestContext::new().await;

    let signup = || NewUser {
        email: "race@gmail.com".into(),
        password: "test123".into(),
        name: "Race".into(),
        ..Default::default()
    };

    let (a, b) = tokio::join!(ctx.db.create_user(signup()), ctx.db.create_user(signup()));

    let (ok, err) = match (a, b) {
        (Ok(user), Err(e)) | (Err(e), Ok(user)) => (user, e),
        (a, b) => panic!("expected one success and one failure, got {:?} / {:?}", a.map(|u| u.email), b.map(|u| u.email)),
    };
    assert_eq!(ok.email, "race@gmail.com");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(ctx.db.list_users_paginated(1, 100).await.unwrap().1, 1);
}

#[actix_web::test]
async fn test_unknown_email_and_wrong_password_fail_alike() {
    let ctx = TestContext::new().await;

    ctx.db.create_superuser("admin@gmail.com", "admin123").await.unwrap();

    let unknown = ctx.db.issue_token("nobody@gmail.com", "admin123").await.unwrap_err();
    let wrong = ctx.db.issue_token("admin@gmail.com", "admin124").await.unwrap_err();
    assert_eq!(unknown.kind(), wrong.kind());
    assert_eq!(unknown.to_string(), wrong.to_string());
}
