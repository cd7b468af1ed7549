use omnitrackr_shared::const_config::path::{
    PATH_ADMIN_SETTINGS, PATH_ALERTS, PATH_AUDIT_LOGS, PATH_DASHBOARD, PATH_DEPARTMENTS,
    PATH_FILE_SOURCES, PATH_FILE_VALIDATION, PATH_LOGIN, PATH_OUTWARD_FILES, PATH_REPORTS,
    PATH_ROOT,
};
use strum::{EnumIter, IntoEnumIterator as _};
use tracing::info;

use crate::{KeyValueStore, SessionManager};

/// Every page of the application. All but [`Route::Login`] need a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Route {
    Login,
    Dashboard,
    Alerts,
    FileSources,
    OutwardFiles,
    FileValidation,
    AuditLogs,
    Reports,
    Departments,
    AdminSettings,
}

impl Route {
    /// The index and any path that is not known land on the dashboard
    pub fn from_path(path: &str) -> Self {
        match path {
            PATH_LOGIN => Self::Login,
            PATH_ROOT | PATH_DASHBOARD => Self::Dashboard,
            PATH_ALERTS => Self::Alerts,
            PATH_FILE_SOURCES => Self::FileSources,
            PATH_OUTWARD_FILES => Self::OutwardFiles,
            PATH_FILE_VALIDATION => Self::FileValidation,
            PATH_AUDIT_LOGS => Self::AuditLogs,
            PATH_REPORTS => Self::Reports,
            PATH_DEPARTMENTS => Self::Departments,
            PATH_ADMIN_SETTINGS => Self::AdminSettings,
            _ => Self::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => PATH_LOGIN,
            Route::Dashboard => PATH_DASHBOARD,
            Route::Alerts => PATH_ALERTS,
            Route::FileSources => PATH_FILE_SOURCES,
            Route::OutwardFiles => PATH_OUTWARD_FILES,
            Route::FileValidation => PATH_FILE_VALIDATION,
            Route::AuditLogs => PATH_AUDIT_LOGS,
            Route::Reports => PATH_REPORTS,
            Route::Departments => PATH_DEPARTMENTS,
            Route::AdminSettings => PATH_ADMIN_SETTINGS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Alerts => "Alerts",
            Route::FileSources => "File Sources",
            Route::OutwardFiles => "Outward Files",
            Route::FileValidation => "File Validation",
            Route::AuditLogs => "Audit Logs",
            Route::Reports => "Reports",
            Route::Departments => "Departments",
            Route::AdminSettings => "Admin Settings",
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Navigation menu entries in display order
    pub fn menu() -> impl Iterator<Item = Self> {
        Self::iter().filter(Self::is_protected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// The persisted session has not been read yet
    #[default]
    Restoring,
    Public,
    Protected,
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Nothing should be shown yet
    Wait,
    Render(Route),
    Redirect(Route),
}

/// Gates navigation between the login page and the rest of the application
#[derive(Debug, Default)]
pub struct RouteGuard {
    state: GuardState,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Brings the guard in line with the session, expected to be called on
    /// every navigation
    pub fn sync<S: KeyValueStore>(&mut self, session: &SessionManager<S>) -> GuardState {
        let new_state = if !session.is_restored() {
            GuardState::Restoring
        } else if session.is_authenticated() {
            GuardState::Protected
        } else {
            GuardState::Public
        };
        if new_state != self.state {
            info!(from = ?self.state, to = ?new_state, "route guard state changed");
            self.state = new_state;
        }
        self.state
    }

    pub fn decide(&self, path: &str) -> GuardDecision {
        let route = Route::from_path(path);
        match (self.state, route.is_protected()) {
            (GuardState::Restoring, _) => GuardDecision::Wait,
            (GuardState::Public, false) | (GuardState::Protected, true) => {
                GuardDecision::Render(route)
            }
            (GuardState::Public, true) => GuardDecision::Redirect(Route::Login),
            (GuardState::Protected, false) => GuardDecision::Redirect(Route::Dashboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use omnitrackr_shared::{
        const_config::credentials::CREDENTIALS_DEMO_PASSWORD, req_args::LoginReqArgs,
    };
    use rstest::rstest;

    use super::*;
    use crate::{CredentialStore, MemoryStore};

    fn guard_in(state: GuardState) -> RouteGuard {
        RouteGuard { state }
    }

    #[rstest]
    #[case::login("/login", Route::Login)]
    #[case::index("/", Route::Dashboard)]
    #[case::dashboard("/dashboard", Route::Dashboard)]
    #[case::admin_settings("/admin-settings", Route::AdminSettings)]
    #[case::unknown("/does-not-exist", Route::Dashboard)]
    #[case::trailing_slash("/alerts/", Route::Dashboard)]
    #[case::empty("", Route::Dashboard)]
    fn path_to_route(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[test]
    fn path_round_trips() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn menu_lists_protected_pages_in_order() {
        // Act
        let actual: Vec<&str> = Route::menu().map(|x| x.title()).collect();

        // Assert
        assert_eq!(
            actual,
            [
                "Dashboard",
                "Alerts",
                "File Sources",
                "Outward Files",
                "File Validation",
                "Audit Logs",
                "Reports",
                "Departments",
                "Admin Settings",
            ]
        );
    }

    #[rstest]
    #[case::restoring_login(GuardState::Restoring, "/login", GuardDecision::Wait)]
    #[case::restoring_protected(GuardState::Restoring, "/alerts", GuardDecision::Wait)]
    #[case::public_login(GuardState::Public, "/login", GuardDecision::Render(Route::Login))]
    #[case::public_protected(
        GuardState::Public,
        "/reports",
        GuardDecision::Redirect(Route::Login)
    )]
    #[case::public_index(GuardState::Public, "/", GuardDecision::Redirect(Route::Login))]
    #[case::protected_login(
        GuardState::Protected,
        "/login",
        GuardDecision::Redirect(Route::Dashboard)
    )]
    #[case::protected_page(
        GuardState::Protected,
        "/audit-logs",
        GuardDecision::Render(Route::AuditLogs)
    )]
    #[case::protected_unknown(
        GuardState::Protected,
        "/nowhere",
        GuardDecision::Render(Route::Dashboard)
    )]
    fn decisions(
        #[case] state: GuardState,
        #[case] path: &str,
        #[case] expected: GuardDecision,
    ) {
        // Arrange
        let guard = guard_in(state);

        // Act
        let actual = guard.decide(path);

        // Assert
        assert_eq!(actual, expected);
    }

    #[test]
    fn sync_follows_session() {
        // Arrange
        let mut session = SessionManager::new(
            CredentialStore::demo(),
            MemoryStore::default(),
            "session",
        );
        let mut guard = RouteGuard::new();

        // Act + Assert
        assert_eq!(guard.sync(&session), GuardState::Restoring);
        let _ = session.restore();
        assert_eq!(guard.sync(&session), GuardState::Public);
        let outcome = session.login(&LoginReqArgs::new(
            "admin@omnitrackr.com",
            CREDENTIALS_DEMO_PASSWORD.to_string().into(),
        ));
        assert!(outcome.is_success());
        assert_eq!(guard.sync(&session), GuardState::Protected);
        session.logout();
        assert_eq!(guard.sync(&session), GuardState::Public);
    }
}
