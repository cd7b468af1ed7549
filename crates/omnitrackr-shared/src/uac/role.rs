use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    /// Returns `true` if the role is [`Admin`].
    ///
    /// [`Admin`]: Role::Admin
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Label shown in page headers
    pub fn title(&self) -> &'static str {
        match self {
            Role::Employee => "Department User",
            Role::Admin => "Administrator",
        }
    }
}
