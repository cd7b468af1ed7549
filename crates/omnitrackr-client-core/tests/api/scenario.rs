use crate::helpers::{login_args, restart_app, spawn_app, ADMIN_EMAIL, FINANCE_EMAIL};
use omnitrackr_client_core::{GuardDecision, Route, RouteGuard};

#[test]
fn finance_then_admin_scenario() {
    // Arrange
    let mut app = spawn_app();

    // Act - Finance user logs in
    assert!(app.login(&login_args(FINANCE_EMAIL)).is_success());

    // Assert - Scoped to Finance without a switcher
    assert!(app.is_authenticated());
    assert_eq!(
        app.identity().unwrap().current_department().unwrap(),
        &"Finance"
    );
    assert!(!app.scope().can_switch_departments());
    assert_eq!(app.scope().visible_departments(), [&"Finance"]);

    // Act - Admin logs in instead
    app.logout();
    assert!(app.login(&login_args(ADMIN_EMAIL)).is_success());

    // Assert - Admin may switch and sees every department
    assert!(app.scope().can_switch_departments());
    assert_eq!(app.scope().visible_departments().len(), 8);

    // Act - Switch to Cargo
    app.switch_department("Cargo").unwrap();

    // Assert
    assert_eq!(
        app.identity().unwrap().current_department().unwrap(),
        &"Cargo"
    );

    // Act - Switch to a department that does not exist
    let _ = app.switch_department("Nonexistent");

    // Assert - Still on Cargo, also after a restart
    assert_eq!(
        app.identity().unwrap().current_department().unwrap(),
        &"Cargo"
    );
    let app = restart_app(app);
    assert_eq!(
        app.identity().unwrap().current_department().unwrap(),
        &"Cargo"
    );
}

#[test]
fn guard_follows_login_and_logout() {
    // Arrange
    let mut app = spawn_app();
    let mut guard = RouteGuard::new();
    guard.sync(&app);

    // Assert - Protected pages redirect to login
    assert_eq!(guard.decide("/alerts"), GuardDecision::Redirect(Route::Login));

    // Act - Login
    assert!(app.login(&login_args(FINANCE_EMAIL)).is_success());
    guard.sync(&app);

    // Assert - Protected pages render and login redirects away
    assert_eq!(guard.decide("/alerts"), GuardDecision::Render(Route::Alerts));
    assert_eq!(
        guard.decide("/login"),
        GuardDecision::Redirect(Route::Dashboard)
    );

    // Act - Logout twice
    app.logout();
    app.logout();
    guard.sync(&app);

    // Assert
    assert_eq!(guard.decide("/"), GuardDecision::Redirect(Route::Login));
}
