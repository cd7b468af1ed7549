use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;

use super::IdentityError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentName(String);

/// The departments an identity may access
///
/// Never empty and never holds the same department twice. Order is kept as
/// given because it is the order departments are offered in when switching.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<DepartmentName>", into = "Vec<DepartmentName>")]
pub struct Departments(Vec<DepartmentName>);

impl TryFrom<String> for DepartmentName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ConversionError::Empty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for DepartmentName {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<DepartmentName> for String {
    fn from(value: DepartmentName) -> Self {
        value.0
    }
}

impl AsRef<str> for DepartmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for DepartmentName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0[..]
    }
}

impl Display for DepartmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for DepartmentName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DepartmentName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Departments {
    pub fn contains(&self, department: &str) -> bool {
        self.0.iter().any(|x| x == department)
    }

    /// Returns the stored copy of `department` if it is accessible
    pub fn get(&self, department: &str) -> Option<&DepartmentName> {
        self.0.iter().find(|x| *x == department)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DepartmentName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, provided for completeness alongside [`Self::len`]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> &DepartmentName {
        self.0
            .first()
            .expect("construction guarantees at least one department")
    }
}

impl TryFrom<Vec<DepartmentName>> for Departments {
    type Error = IdentityError;

    fn try_from(value: Vec<DepartmentName>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(IdentityError::NoDepartments);
        }
        for (i, department) in value.iter().enumerate() {
            if value[..i].contains(department) {
                return Err(IdentityError::DuplicateDepartment(department.clone()));
            }
        }
        Ok(Self(value))
    }
}

impl TryFrom<&[&str]> for Departments {
    type Error = IdentityError;

    fn try_from(value: &[&str]) -> Result<Self, Self::Error> {
        let names = value
            .iter()
            .map(|x| DepartmentName::try_from(*x))
            .collect::<Result<Vec<_>, _>>()?;
        names.try_into()
    }
}

impl From<Departments> for Vec<DepartmentName> {
    fn from(value: Departments) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a Departments {
    type Item = &'a DepartmentName;
    type IntoIter = std::slice::Iter<'a, DepartmentName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
