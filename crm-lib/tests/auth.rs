//! Integration tests for the login stub and role checks.

use std::time::Duration;

use crm_lib::auth::*;
use crm_lib::error::AuthError;

fn flow() -> LoginFlow {
    LoginFlow::with_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_admin_login() {
    let pending = flow()
        .submit_credentials("admin@company.com", "secret")
        .await
        .unwrap();
    assert_eq!(pending.email(), "admin@company.com");

    let session = pending.verify("123456").await.unwrap();
    assert_eq!(session.role(), Role::Admin);
    assert_eq!(session.user().name, "Admin User");
    assert_eq!(session.user().id, 1);
    assert!(has_role(&session, Role::Admin));
    assert!(!has_role(&session, Role::Agent));
}

#[tokio::test]
async fn test_agent_login() {
    let session = flow()
        .submit_credentials("agent@company.com", "secret")
        .await
        .unwrap()
        .verify("000000")
        .await
        .unwrap();
    assert_eq!(session.role(), Role::Agent);
    assert_eq!(session.user().name, "Agent User");
    assert_eq!(session.user().email, "agent@company.com");
}

#[tokio::test]
async fn test_missing_credentials() {
    let err = flow().submit_credentials("", "secret").await.unwrap_err();
    assert_eq!(err, AuthError::MissingCredentials);

    let err = flow()
        .submit_credentials("agent@company.com", "")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::MissingCredentials);
    assert_eq!(err.to_string(), "please fill in all fields");
}

#[tokio::test]
async fn test_empty_otp_can_be_retried() {
    let pending = flow()
        .submit_credentials("agent@company.com", "secret")
        .await
        .unwrap();

    assert_eq!(pending.verify("").await.unwrap_err(), AuthError::MissingOtp);
    assert!(pending.verify("123456").await.is_ok());
}

#[tokio::test]
async fn test_only_empty_input_is_missing() {
    let pending = flow()
        .submit_credentials(" agent@company.com ", " ")
        .await
        .unwrap();
    assert_eq!(pending.email(), " agent@company.com ");

    let session = pending.verify("   ").await.unwrap();
    assert_eq!(session.role(), Role::Agent);
}

#[tokio::test]
async fn test_blank_email_is_not_missing() {
    assert!(flow().submit_credentials("   ", "secret").await.is_ok());
}

#[tokio::test]
async fn test_logout_returns_user() {
    let session = flow()
        .submit_credentials("admin@company.com", "secret")
        .await
        .unwrap()
        .verify("1")
        .await
        .unwrap();
    let user = session.logout();
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test(start_paused = true)]
async fn test_login_waits_for_simulated_latency() {
    let start = tokio::time::Instant::now();
    let pending = LoginFlow::new()
        .submit_credentials("agent@company.com", "secret")
        .await
        .unwrap();
    pending.verify("123456").await.unwrap();
    assert!(start.elapsed() >= DEFAULT_LOGIN_DELAY * 2);
}
