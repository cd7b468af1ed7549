use omnitrackr_client_core::Route;
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{cli::PageFilters, ui_helpers::write_table};

/// Lists the registered accounts. Read only, the registry is fixed at startup.
#[derive(Debug)]
pub struct UiAdminSettings {
    rows: Vec<[String; 4]>,
}

impl DisplayablePage for UiAdminSettings {
    fn route() -> Route {
        Route::AdminSettings
    }

    fn new_page(ctx: &PageContext<'_>, _filters: &PageFilters) -> anyhow::Result<Self> {
        let rows = ctx
            .credentials
            .identities()
            .iter()
            .map(|identity| {
                [
                    identity.name.to_string(),
                    identity.email.to_string(),
                    format!("[{}]", identity.role.title()),
                    identity
                        .departments()
                        .iter()
                        .map(|x| x.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                ]
            })
            .collect();
        Ok(Self { rows })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, ["Name", "Email", "Role", "Departments"], &self.rows)
    }
}
