//! Stores the session and access functionality shared between clients
//!
//! Everything here is synchronous. The [`SessionManager`] is meant to be owned
//! by the application root and lent out to the route layer and views.

#![warn(unused_crate_dependencies)]

mod credentials;
mod guard;
mod scope;
mod session;
mod storage;

pub use credentials::{CredentialStore, DemoAccount};
pub use guard::{GuardDecision, GuardState, Route, RouteGuard};
pub use scope::{AccessScope, Scoped};
pub use session::{LoginOutcome, SessionManager, UiCallBack};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
