use futures::channel::oneshot;
use omnitrackr_client_core::{DemoAccount, KeyValueStore, LoginOutcome, SessionManager};
use omnitrackr_shared::{
    const_config::credentials::CREDENTIALS_DEMO_PASSWORD, internal_error, req_args::LoginReqArgs,
    uac::AuthError,
};
use secrecy::ExposeSecret as _;
use std::fmt::{self, Debug};
use tracing::{debug, info, warn};

use crate::ui_helpers::write_table;

#[derive(Debug, Default)]
pub struct UiLogin {
    login_attempt_status: LoginAttemptStatus,
    pending: Option<PendingLogin>,
}

/// A login that was sent but whose outcome has not been read yet
struct PendingLogin {
    /// Navigation epoch current when the attempt was submitted
    epoch: u64,
    rx: oneshot::Receiver<LoginOutcome>,
}

impl Debug for PendingLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLogin")
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LoginAttemptStatus {
    #[default]
    NotAttempted,
    Failed(String),
    Success,
}

impl UiLogin {
    pub fn status(&self) -> &LoginAttemptStatus {
        &self.login_attempt_status
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.pending.is_some()
    }

    fn is_allowed_to_login(&self) -> bool {
        !self.is_awaiting_response() && self.login_attempt_status != LoginAttemptStatus::Success
    }

    /// Ignored if an attempt is already pending or has succeeded. An empty
    /// field fails the attempt without sending it.
    #[tracing::instrument(skip(self, session))]
    pub fn send_login_attempt<S: KeyValueStore>(
        &mut self,
        session: &mut SessionManager<S>,
        args: LoginReqArgs,
        epoch: u64,
    ) {
        if !self.is_allowed_to_login() {
            warn!(status = ?self.login_attempt_status, "login attempt not allowed");
            return;
        }
        if args.email.is_empty() || args.password.expose_secret().is_empty() {
            self.login_attempt_status =
                LoginAttemptStatus::Failed(AuthError::MissingCredentials.to_string());
            info!("login attempt with an empty field");
            return;
        }
        let rx = session.request_login(args, || debug!("login outcome ready"));
        self.pending = Some(PendingLogin { epoch, rx });
    }

    /// Reads the outcome of the pending attempt if it has arrived
    ///
    /// Outcomes of attempts submitted before the last navigation are dropped
    /// without changing the status shown on this page.
    #[tracing::instrument(skip(self))]
    pub fn check_login_attempt_status(&mut self, current_epoch: u64) -> Option<LoginOutcome> {
        let mut pending = self.pending.take()?;
        match pending.rx.try_recv() {
            Ok(Some(outcome)) => {
                if pending.epoch != current_epoch {
                    info!(
                        submitted_epoch = pending.epoch,
                        "discarding login outcome received after navigating away"
                    );
                    return None;
                }
                info!("login outcome from client-core: {outcome:?}");
                self.login_attempt_status = match outcome.failure_message() {
                    None => LoginAttemptStatus::Success,
                    Some(msg) => LoginAttemptStatus::Failed(msg),
                };
                info!(
                    "login_attempt_status changed to: {:?}",
                    self.login_attempt_status
                );
                Some(outcome)
            }
            Ok(None) => {
                self.pending = Some(pending);
                None
            }
            Err(e) => {
                self.login_attempt_status = LoginAttemptStatus::Failed(internal_error!(e));
                None
            }
        }
    }

    /// Login screen body with the accounts that may be used
    pub fn view<'a>(&'a self, accounts: &'a [DemoAccount]) -> impl fmt::Display + 'a {
        LoginView {
            page: self,
            accounts,
        }
    }
}

struct LoginView<'a> {
    page: &'a UiLogin,
    accounts: &'a [DemoAccount],
}

impl fmt::Display for LoginView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Login ==")?;
        if self.page.is_awaiting_response() {
            writeln!(f, "Signing In...")?;
        }
        if let LoginAttemptStatus::Failed(e) = &self.page.login_attempt_status {
            writeln!(f, "Login attempt failed: {e}")?;
        }
        writeln!(f)?;
        writeln!(f, "Demo Accounts")?;
        let rows: Vec<_> = self
            .accounts
            .iter()
            .map(|x| [x.email.clone(), x.label.clone()])
            .collect();
        write_table(f, ["Email", "Account"], &rows)?;
        writeln!(f, "Password for all accounts: {CREDENTIALS_DEMO_PASSWORD}")
    }
}
