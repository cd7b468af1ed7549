use serde::{Deserialize, Serialize};

use crate::id::UserId;

use super::{DepartmentName, Departments, DisplayName, Email, IdentityError, Role, ScopeError};

/// An authenticated actor
///
/// Invariant: when set, `current_department` is one of `departments`. This
/// is checked on construction and on deserialization so a value restored from
/// storage cannot break it either.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "IdentityRecord")]
pub struct Identity {
    pub id: UserId,
    pub email: Email,
    pub name: DisplayName,
    pub role: Role,
    departments: Departments,
    current_department: Option<DepartmentName>,
}

/// Unchecked shape of [`Identity`] used as an intermediate when deserializing
#[derive(Deserialize)]
struct IdentityRecord {
    id: UserId,
    email: Email,
    name: DisplayName,
    role: Role,
    departments: Departments,
    current_department: Option<DepartmentName>,
}

impl Identity {
    pub fn new(
        id: UserId,
        email: Email,
        name: DisplayName,
        role: Role,
        departments: Departments,
        current_department: Option<DepartmentName>,
    ) -> Result<Self, IdentityError> {
        if let Some(current) = current_department.as_ref() {
            if !departments.contains(current) {
                return Err(IdentityError::CurrentNotAccessible(current.clone()));
            }
        }
        Ok(Self {
            id,
            email,
            name,
            role,
            departments,
            current_department,
        })
    }

    pub fn departments(&self) -> &Departments {
        &self.departments
    }

    pub fn current_department(&self) -> Option<&DepartmentName> {
        self.current_department.as_ref()
    }

    /// Makes `target` the current department if it is accessible, otherwise
    /// leaves the identity unchanged
    pub fn switch_department(&mut self, target: &str) -> Result<(), ScopeError> {
        let Some(department) = self.departments.get(target) else {
            return Err(ScopeError::DepartmentNotAccessible {
                department: target.to_string(),
                email: self.email.clone(),
            });
        };
        self.current_department = Some(department.clone());
        Ok(())
    }
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = IdentityError;

    fn try_from(value: IdentityRecord) -> Result<Self, Self::Error> {
        Self::new(
            value.id,
            value.email,
            value.name,
            value.role,
            value.departments,
            value.current_department,
        )
    }
}
