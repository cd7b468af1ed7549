use crate::errors::{ConversionError, NotLoggedInError};

use super::{DepartmentName, Email};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password. Try one of the demo accounts.")]
    InvalidEmailOrPassword,
    #[error("Email and password are both required")]
    MissingCredentials,
}

/// Raised when a department switch is rejected. The identity is left as it was.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScopeError {
    #[error(transparent)]
    NotLoggedIn(#[from] NotLoggedInError),
    #[error("'{department}' is not one of the departments {email} may access")]
    DepartmentNotAccessible { department: String, email: Email },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IdentityError {
    #[error("At least one department is required")]
    NoDepartments,
    #[error("Department listed more than once: {0}")]
    DuplicateDepartment(DepartmentName),
    #[error("Current department '{0}' is not in the list of accessible departments")]
    CurrentNotAccessible(DepartmentName),
    #[error("Invalid field value: {0}")]
    Conversion(#[from] ConversionError),
}

impl ScopeError {
    /// Returns `true` if the scope error is [`DepartmentNotAccessible`].
    ///
    /// [`DepartmentNotAccessible`]: ScopeError::DepartmentNotAccessible
    #[must_use]
    pub fn is_department_not_accessible(&self) -> bool {
        matches!(self, Self::DepartmentNotAccessible { .. })
    }
}
