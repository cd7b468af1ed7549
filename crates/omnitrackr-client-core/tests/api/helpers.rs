use omnitrackr_client_core::{CredentialStore, FileStore, KeyValueStore, MemoryStore, SessionManager};
use omnitrackr_shared::{
    const_config::{credentials::CREDENTIALS_DEMO_PASSWORD, session::SESSION_STORAGE_KEY},
    req_args::LoginReqArgs,
};
use std::path::PathBuf;

pub const FINANCE_EMAIL: &str = "finance@omnitrackr.com";
pub const ADMIN_EMAIL: &str = "admin@omnitrackr.com";

pub fn no_cb() {}

pub fn login_args(email: &str) -> LoginReqArgs {
    LoginReqArgs::new(email, CREDENTIALS_DEMO_PASSWORD.to_string().into())
}

/// Builds a manager over `store` and restores it like an application start
pub fn start_app<S: KeyValueStore>(store: S) -> SessionManager<S> {
    let mut result = SessionManager::new(CredentialStore::demo(), store, SESSION_STORAGE_KEY);
    let _ = result.restore();
    result
}

pub fn spawn_app() -> SessionManager<MemoryStore> {
    start_app(MemoryStore::default())
}

/// Drops the running manager and starts a new one over the same storage
pub fn restart_app<S: KeyValueStore>(app: SessionManager<S>) -> SessionManager<S> {
    start_app(app.into_store())
}

/// Storage directory that is removed when dropped
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new() -> Self {
        Self(std::env::temp_dir().join(format!("omnitrackr-api-{}", uuid::Uuid::new_v4())))
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.0.clone())
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}
