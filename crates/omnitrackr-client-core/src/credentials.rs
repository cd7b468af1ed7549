use omnitrackr_shared::{
    const_config::credentials::{CREDENTIALS_ADMIN_ACCOUNT_LABEL, CREDENTIALS_DEMO_PASSWORD},
    uac::{Departments, Identity, Role},
};
use secrecy::{ExposeSecret as _, SecretString};
use std::fmt::Debug;
use tracing::debug;

/// Fixed registry of accounts that may log in
///
/// All accounts share a single password which is compared as plain text. This
/// is only suitable for the demo accounts it was built for.
#[derive(Clone)]
pub struct CredentialStore {
    shared_password: SecretString,
    templates: Vec<Identity>,
}

/// An entry of the account listing shown on the login screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub label: String,
}

impl CredentialStore {
    /// Templates are expected to have unique emails, if not the first match wins
    pub fn new(shared_password: SecretString, templates: Vec<Identity>) -> Self {
        Self {
            shared_password,
            templates,
        }
    }

    /// The accounts available in the demo deployment
    pub fn demo() -> Self {
        let templates = vec![
            demo_identity(1, "finance@omnitrackr.com", "Sarah Johnson", Role::Employee, &["Finance"]),
            demo_identity(2, "cargo@omnitrackr.com", "Mike Chen", Role::Employee, &["Cargo"]),
            demo_identity(
                3,
                "ops@omnitrackr.com",
                "David Rodriguez",
                Role::Employee,
                &["Operations"],
            ),
            demo_identity(4, "loyalty@omnitrackr.com", "Emma Watson", Role::Employee, &["Loyalty"]),
            demo_identity(
                5,
                "admin@omnitrackr.com",
                "John Smith",
                Role::Admin,
                &[
                    "Finance",
                    "Cargo",
                    "Operations",
                    "Loyalty",
                    "Commercial",
                    "Customer Experience",
                    "Engineering",
                    "HR/Admin",
                ],
            ),
        ];
        Self::new(CREDENTIALS_DEMO_PASSWORD.to_string().into(), templates)
    }

    /// Returns a copy of the registered identity if both email and password
    /// match
    #[tracing::instrument(skip(password))]
    pub fn verify(&self, email: &str, password: &SecretString) -> Option<Identity> {
        let Some(template) = self.find(email) else {
            debug!("No account registered for {email:?}");
            return None;
        };
        if password.expose_secret() == self.shared_password.expose_secret() {
            Some(template.clone())
        } else {
            debug!("Password mismatch for {email:?}");
            None
        }
    }

    /// Registered identities in registration order
    pub fn identities(&self) -> &[Identity] {
        &self.templates
    }

    /// Lists the accounts with the department they show or the admin label
    pub fn demo_accounts(&self) -> Vec<DemoAccount> {
        self.templates
            .iter()
            .map(|identity| DemoAccount {
                email: identity.email.to_string(),
                label: if identity.role.is_admin() {
                    CREDENTIALS_ADMIN_ACCOUNT_LABEL.to_string()
                } else {
                    identity.departments().first().to_string()
                },
            })
            .collect()
    }

    fn find(&self, email: &str) -> Option<&Identity> {
        self.templates
            .iter()
            .find(|identity| identity.email.as_ref() == email)
    }
}

impl Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("account_count", &self.templates.len())
            .finish_non_exhaustive()
    }
}

/// Builds an identity whose current department is its first department
///
/// Only called with the literals in [`CredentialStore::demo`], see the test
/// that ensures they are valid
fn demo_identity(id: u64, email: &str, name: &str, role: Role, departments: &[&str]) -> Identity {
    let departments: Departments = departments
        .try_into()
        .expect("test below ensures demo departments are valid");
    let current = Some(departments.first().clone());
    Identity::new(
        id.into(),
        email.try_into().expect("test below ensures demo emails are valid"),
        name.try_into().expect("test below ensures demo names are valid"),
        role,
        departments,
        current,
    )
    .expect("test below ensures demo identities are valid")
}
