use crate::helpers::{login_args, restart_app, start_app, TempDir, ADMIN_EMAIL, FINANCE_EMAIL};
use omnitrackr_client_core::KeyValueStore as _;
use omnitrackr_shared::const_config::session::SESSION_STORAGE_KEY;

#[test]
fn session_survives_restart_on_disk() {
    // Arrange
    let dir = TempDir::new();
    let mut app = start_app(dir.store());
    assert!(app.login(&login_args(ADMIN_EMAIL)).is_success());
    app.switch_department("Loyalty").unwrap();
    let expected = app.identity().cloned();

    // Act
    let app = start_app(dir.store());

    // Assert
    assert_eq!(app.identity().cloned(), expected);
    assert_eq!(
        app.identity().unwrap().current_department().unwrap(),
        &"Loyalty"
    );
}

#[test]
fn logout_removes_session_from_disk() {
    // Arrange
    let dir = TempDir::new();
    let mut app = start_app(dir.store());
    assert!(app.login(&login_args(FINANCE_EMAIL)).is_success());

    // Act
    app.logout();
    let app = restart_app(app);

    // Assert
    assert!(!app.is_authenticated());
    assert_eq!(dir.store().get(SESSION_STORAGE_KEY).unwrap(), None);
}

#[test]
fn corrupted_file_restores_unauthenticated() {
    // Arrange
    let dir = TempDir::new();
    dir.store()
        .set(SESSION_STORAGE_KEY, r#"{"id":"not a number"}"#)
        .unwrap();

    // Act
    let app = start_app(dir.store());

    // Assert
    assert!(app.is_restored());
    assert!(!app.is_authenticated());
}
