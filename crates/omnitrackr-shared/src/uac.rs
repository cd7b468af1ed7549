//! Shared items related to user account control

mod department;
mod errors;
mod identity;
mod role;
mod user;

pub use department::{DepartmentName, Departments};
pub use errors::{AuthError, IdentityError, ScopeError};
pub use identity::Identity;
pub use role::Role;
pub use user::{DisplayName, Email};
