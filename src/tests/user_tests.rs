use crate::core::errors::SkillPathError;
use crate::core::models::user::Role;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_register_and_login() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let user = service
        .register_user(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "password123".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.role, Role::User);
    assert_ne!(user.password, "password123"); // stored hashed

    let (logged_in, token) = service.login("test@example.com", "password123").await.unwrap();
    assert_eq!(logged_in.id, user.id);

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "USER");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let service = create_test_service();

    service
        .register_user(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "password123".to_string(),
        )
        .await
        .unwrap();

    let result = service
        .register_user(
            "Other User".to_string(),
            "test@example.com".to_string(),
            "password456".to_string(),
        )
        .await;
    assert!(matches!(result, Err(SkillPathError::EmailAlreadyInUse(_))));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let service = create_test_service();

    let result = service
        .register_user("Test User".to_string(), "invalid".to_string(), "password123".to_string())
        .await;
    assert!(matches!(result, Err(SkillPathError::InvalidEmail(_))));
}

#[tokio::test]
async fn test_register_missing_password() {
    let service = create_test_service();

    let result = service
        .register_user("Test User".to_string(), "test@example.com".to_string(), String::new())
        .await;
    assert!(matches!(result, Err(SkillPathError::MissingField(field)) if field == "password"));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let service = create_test_service();

    let result = service.login("nobody@example.com", "password123").await;
    assert!(matches!(result, Err(SkillPathError::UserNotFound(_))));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let service = create_test_service();

    service
        .register_user(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "password123".to_string(),
        )
        .await
        .unwrap();

    let result = service.login("test@example.com", "wrong").await;
    assert!(matches!(result, Err(SkillPathError::InvalidCredentials)));
}

#[tokio::test]
async fn test_admin_email_gets_admin_role() {
    let service = create_test_service();

    let admin = service
        .register_user(
            "Admin".to_string(),
            "admin@example.com".to_string(),
            "password123".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(admin.role, Role::Admin);

    let (_, token) = service.login("admin@example.com", "password123").await.unwrap();
    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.role, "ADMIN");
}
