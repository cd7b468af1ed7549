use anyhow::Context as _;
use futures::channel::oneshot;
use omnitrackr_shared::{
    errors::NotLoggedInError,
    log_err_as_warn,
    req_args::LoginReqArgs,
    uac::{AuthError, Identity, ScopeError},
};
use tracing::{debug, info, warn};

use crate::{scope::AccessScope, CredentialStore, KeyValueStore};

/// Owns the current session and is the only way to change it
///
/// Every change to the identity is written to a single key of the
/// [`KeyValueStore`] and the key is removed on logout. Failures to write are
/// logged and otherwise ignored, the in memory session stays authoritative.
#[derive(Debug)]
pub struct SessionManager<S> {
    credentials: CredentialStore,
    store: S,
    session_key: String,
    identity: Option<Identity>,
    is_restored: bool,
}

#[must_use]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
}

impl LoginOutcome {
    /// Returns `true` if the login outcome is [`Success`].
    ///
    /// [`Success`]: LoginOutcome::Success
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Message to show the user, `None` on success
    pub fn failure_message(&self) -> Option<String> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::InvalidCredentials => Some(AuthError::InvalidEmailOrPassword.to_string()),
        }
    }
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Starts out unauthenticated and not yet restored, see [`Self::restore`]
    pub fn new<K: Into<String>>(credentials: CredentialStore, store: S, session_key: K) -> Self {
        Self {
            credentials,
            store,
            session_key: session_key.into(),
            identity: None,
            is_restored: false,
        }
    }

    /// Adopts the identity found in storage, if any, without checking it
    /// against the credential store
    ///
    /// Unreadable or malformed values are treated as no session.
    #[tracing::instrument(skip(self))]
    pub fn restore(&mut self) -> Option<&Identity> {
        self.identity = match self.load_persisted() {
            Ok(identity) => identity,
            Err(e) => {
                warn!(?e, "discarding persisted session");
                None
            }
        };
        self.is_restored = true;
        info!(is_authenticated = self.is_authenticated(), "session restored");
        self.identity.as_ref()
    }

    /// On failure the session is left exactly as it was
    #[tracing::instrument(skip(self))]
    pub fn login(&mut self, args: &LoginReqArgs) -> LoginOutcome {
        match self.credentials.verify(&args.email, &args.password) {
            Some(identity) => {
                info!(email = %identity.email, role = %identity.role, "login succeeded");
                self.identity = Some(identity);
                self.persist();
                LoginOutcome::Success
            }
            None => {
                info!("login rejected");
                LoginOutcome::InvalidCredentials
            }
        }
    }

    /// Same as [`Self::login`] but delivers the outcome on a channel and then
    /// calls `ui_notify`, for callers that treat login as completing later
    pub fn request_login<F: UiCallBack>(
        &mut self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<LoginOutcome> {
        let (tx, rx) = oneshot::channel();
        let outcome = self.login(&args);
        if tx.send(outcome).is_err() {
            debug!("login receiver dropped before the outcome was sent");
        }
        ui_notify();
        rx
    }

    /// Safe to call when already logged out
    #[tracing::instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            info!(email = %identity.email, "logged out");
        }
        log_err_as_warn!(
            self.store.remove(&self.session_key),
            "failed to remove persisted session"
        );
    }

    /// Changes the current department if `target` is one the identity may
    /// access. Otherwise nothing changes and the reason is returned, callers
    /// that do not need it may ignore it.
    #[tracing::instrument(skip(self))]
    pub fn switch_department(&mut self, target: &str) -> Result<(), ScopeError> {
        let Some(identity) = self.identity.as_mut() else {
            warn!("department switch without a session");
            return Err(NotLoggedInError.into());
        };
        if let Err(e) = identity.switch_department(target) {
            warn!(?e, "department switch rejected");
            return Err(e);
        }
        info!("switched department");
        self.persist();
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// `false` until [`Self::restore`] has run
    pub fn is_restored(&self) -> bool {
        self.is_restored
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn scope(&self) -> AccessScope<'_> {
        AccessScope::new(self.identity())
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives back the store, for example to hand it to a new manager the way
    /// a restart would
    pub fn into_store(self) -> S {
        self.store
    }

    fn load_persisted(&self) -> anyhow::Result<Option<Identity>> {
        let Some(value) = self.store.get(&self.session_key)? else {
            return Ok(None);
        };
        let identity = serde_json::from_str(&value).context("malformed persisted identity")?;
        Ok(Some(identity))
    }

    fn persist(&mut self) {
        let Some(identity) = self.identity.as_ref() else {
            debug_assert!(false, "persist is only called with an identity set");
            return;
        };
        let result = serde_json::to_string(identity)
            .context("failed to serialize identity")
            .and_then(|value| self.store.set(&self.session_key, &value));
        log_err_as_warn!(result, "failed to persist session");
    }
}

pub trait UiCallBack: 'static + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + FnOnce() {}
