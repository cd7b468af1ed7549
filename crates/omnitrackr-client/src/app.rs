use anyhow::bail;
use omnitrackr_client_core::{
    GuardDecision, KeyValueStore, LoginOutcome, Route, RouteGuard, SessionManager,
};
use omnitrackr_shared::{req_args::LoginReqArgs, uac::ScopeError};
use std::fmt::Write as _;
use tracing::{debug, info, instrument, warn};

use crate::{
    cli::PageFilters,
    pages::{login::LoginAttemptStatus, PageContext, UiLogin, UiPage},
    sample_data::SampleData,
};

/// Application root, owns the session and lends it to the guard and pages
#[derive(Debug)]
pub struct OmniApp<S> {
    session: SessionManager<S>,
    guard: RouteGuard,
    data: SampleData,
    route: Route,
    /// Incremented on every navigation so late login outcomes can be told apart
    nav_epoch: u64,
    login_page: UiLogin,
}

impl<S: KeyValueStore> OmniApp<S> {
    pub fn new(session: SessionManager<S>, data: SampleData) -> Self {
        Self {
            session,
            guard: RouteGuard::new(),
            data,
            route: Route::Login,
            nav_epoch: 0,
            login_page: UiLogin::default(),
        }
    }

    /// Restores the persisted session and lands on the index
    #[instrument(skip(self))]
    pub fn start(&mut self) -> GuardDecision {
        let _ = self.session.restore();
        self.navigate(Route::Dashboard.path())
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    pub fn login_page(&self) -> &UiLogin {
        &self.login_page
    }

    /// Follows redirects so [`Self::route`] is always a page that may be shown
    #[instrument(skip(self))]
    pub fn navigate(&mut self, path: &str) -> GuardDecision {
        self.nav_epoch += 1;
        self.guard.sync(&self.session);
        let decision = self.guard.decide(path);
        match decision {
            GuardDecision::Wait => debug!("session not restored yet"),
            GuardDecision::Render(route) => self.route = route,
            GuardDecision::Redirect(route) => {
                info!(to = route.path(), "redirected");
                self.route = route;
            }
        }
        decision
    }

    /// Sends the attempt tagged with the current navigation epoch, see
    /// [`Self::poll_login`] for the outcome
    pub fn submit_login(&mut self, args: LoginReqArgs) {
        self.login_page
            .send_login_attempt(&mut self.session, args, self.nav_epoch);
    }

    /// Moves on to the dashboard once a current attempt succeeds
    pub fn poll_login(&mut self) -> Option<LoginOutcome> {
        let outcome = self
            .login_page
            .check_login_attempt_status(self.nav_epoch)?;
        if outcome.is_success() {
            self.navigate(Route::Dashboard.path());
        }
        Some(outcome)
    }

    /// Submits and reads back a login in one go, rendering the page it lands on
    ///
    /// Fails with the login screen's message if the attempt is rejected. That
    /// includes the case where an earlier session keeps the login screen from
    /// being shown.
    pub fn login(&mut self, args: LoginReqArgs) -> anyhow::Result<String> {
        self.navigate(Route::Login.path());
        self.submit_login(args);
        let _ = self.poll_login();
        if let LoginAttemptStatus::Failed(msg) = self.login_page.status() {
            bail!("{msg}");
        }
        self.render(&PageFilters::default())
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.login_page = UiLogin::default();
        self.navigate(Route::Login.path());
    }

    /// The result may be ignored, a rejected switch changes nothing
    pub fn switch_department(&mut self, department: &str) -> Result<(), ScopeError> {
        self.session.switch_department(department)
    }

    /// Who is logged in and, for admins, the departments they may switch to
    pub fn header(&self) -> String {
        let Some(identity) = self.session.identity() else {
            return "Not logged in\n".to_string();
        };
        let mut result = String::new();
        let current = identity
            .current_department()
            .map(|x| x.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(result, "{} <{}>", identity.name, identity.email);
        let _ = writeln!(result, "Role: {}", identity.role.title());
        let _ = writeln!(result, "Department: {current}");
        let scope = self.session.scope();
        if scope.can_switch_departments() {
            let departments: Vec<String> = scope
                .visible_departments()
                .iter()
                .map(|x| x.to_string())
                .collect();
            let _ = writeln!(result, "Switch to: {}", departments.join(", "));
        }
        result
    }

    /// Navigation entries, only offered once logged in
    pub fn menu(&self) -> String {
        if !self.session.is_authenticated() {
            return "Not logged in\n".to_string();
        }
        Route::menu()
            .map(|route| {
                let marker = if route == self.route { '*' } else { ' ' };
                format!("{marker} {:<17} {}\n", route.path(), route.title())
            })
            .collect()
    }

    /// Renders whatever [`Self::route`] points at
    #[instrument(skip(self))]
    pub fn render(&self, filters: &PageFilters) -> anyhow::Result<String> {
        if self.guard.decide(self.route.path()) == GuardDecision::Wait {
            return Ok(String::new());
        }
        let ctx = PageContext {
            scope: self.session.scope(),
            data: &self.data,
            credentials: self.session.credentials(),
        };
        match UiPage::new_for_route(self.route, &ctx, filters)? {
            Some(page) => Ok(format!("{}{page}", self.header())),
            None => {
                let accounts = self.session.credentials().demo_accounts();
                let view = self.login_page.view(&accounts).to_string();
                Ok(view)
            }
        }
    }

    /// Gives back the storage, used to simulate a restart
    pub fn into_session(self) -> SessionManager<S> {
        self.session
    }
}

/// Warns instead of failing, a rejected switch is not an error for the caller
pub fn log_rejected_switch(result: Result<(), ScopeError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(?e, "department not switched");
            false
        }
    }
}
