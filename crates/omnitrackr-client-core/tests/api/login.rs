use crate::helpers::{login_args, no_cb, spawn_app, ADMIN_EMAIL, FINANCE_EMAIL};
use omnitrackr_client_core::{CredentialStore, LoginOutcome};
use omnitrackr_shared::uac::AuthError;

#[test]
fn login_success_for_every_registered_account() {
    for template in CredentialStore::demo().identities() {
        // Arrange
        let mut app = spawn_app();

        // Act
        let outcome = app.login(&login_args(template.email.as_ref()));

        // Assert
        assert_eq!(outcome, LoginOutcome::Success, "{}", template.email);
        assert_eq!(app.identity(), Some(template));
    }
}

#[test]
fn login_failure_invalid_user() {
    // Arrange
    let mut app = spawn_app();

    // Act
    let outcome = app.login(&login_args("random@omnitrackr.com"));

    // Assert
    assert_eq!(
        outcome.failure_message().unwrap(),
        AuthError::InvalidEmailOrPassword.to_string()
    );
    assert!(!app.is_authenticated());
}

#[test]
fn login_failure_invalid_password() {
    // Arrange
    let mut app = spawn_app();
    let args = login_args(FINANCE_EMAIL).password("random-password".to_string().into());

    // Act
    let outcome = app.login(&args);

    // Assert
    assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    assert!(!app.is_authenticated());
}

#[test]
fn login_logout_round_trip() {
    // Arrange
    let mut app = spawn_app();

    // Assert - Ensure not logged in
    assert!(
        !app.is_authenticated(),
        "should not be logged in before logging in"
    );

    // Act - Login
    let mut rx = app.request_login(login_args(ADMIN_EMAIL), no_cb);

    // Assert - Login successful and identity stored
    assert_eq!(rx.try_recv().unwrap(), Some(LoginOutcome::Success));
    assert_eq!(app.identity().unwrap().email.as_ref(), ADMIN_EMAIL);

    // Act - Logout
    app.logout();

    // Assert - No longer logged in
    assert!(!app.is_authenticated());
}
