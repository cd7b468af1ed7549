use omnitrackr_client_core::{AccessScope, CredentialStore, Route};
use std::fmt;

use crate::{cli::PageFilters, sample_data::SampleData};

pub mod admin_settings;
pub mod alerts;
pub mod audit_logs;
pub mod dashboard;
pub mod departments;
pub mod file_sources;
pub mod file_validation;
pub mod login;
pub mod outward_files;
pub mod reports;

use admin_settings::UiAdminSettings;
use alerts::UiAlerts;
use audit_logs::UiAuditLogs;
use dashboard::UiDashboard;
use departments::UiDepartments;
use file_sources::UiFileSources;
use file_validation::UiFileValidation;
pub use login::UiLogin;
use outward_files::UiOutwardFiles;
use reports::UiReports;

/// What a page may read while it is built
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub scope: AccessScope<'a>,
    pub data: &'a SampleData,
    pub credentials: &'a CredentialStore,
}

#[derive(Debug)]
pub enum UiPage {
    Dashboard(UiDashboard),
    Alerts(UiAlerts),
    FileSources(UiFileSources),
    OutwardFiles(UiOutwardFiles),
    FileValidation(UiFileValidation),
    AuditLogs(UiAuditLogs),
    Reports(UiReports),
    Departments(UiDepartments),
    AdminSettings(UiAdminSettings),
}

/// Trait for types that can be treated as pages to display
///
/// Pages capture the rows they show when they are built so showing them does
/// not need the session anymore
pub trait DisplayablePage: Sized {
    /// The route the page is shown for
    ///
    /// ASSUMPTION: THIS IS UNIQUE PER TYPE
    fn route() -> Route;

    fn title_base() -> &'static str {
        Self::route().title()
    }

    /// Convenance function for working with instances inside of the enum
    fn title_base_from_instance(&self) -> &'static str {
        Self::title_base()
    }

    /// Fails if one of the filters it uses is not valid
    fn new_page(ctx: &PageContext<'_>, filters: &PageFilters) -> anyhow::Result<Self>;

    /// Writes the body of the page, the title is written by the caller
    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! do_on_ui_page {
    ($on:ident, $page:ident, $body:tt) => {
        match $on {
            UiPage::Dashboard($page) => $body,
            UiPage::Alerts($page) => $body,
            UiPage::FileSources($page) => $body,
            UiPage::OutwardFiles($page) => $body,
            UiPage::FileValidation($page) => $body,
            UiPage::AuditLogs($page) => $body,
            UiPage::Reports($page) => $body,
            UiPage::Departments($page) => $body,
            UiPage::AdminSettings($page) => $body,
        }
    };
}

impl UiPage {
    /// Returns `None` for the login route which is not a [`DisplayablePage`]
    #[tracing::instrument(skip(ctx))]
    pub fn new_for_route(
        route: Route,
        ctx: &PageContext<'_>,
        filters: &PageFilters,
    ) -> anyhow::Result<Option<Self>> {
        Ok(Some(match route {
            Route::Login => return Ok(None),
            Route::Dashboard => Self::Dashboard(UiDashboard::new_page(ctx, filters)?),
            Route::Alerts => Self::Alerts(UiAlerts::new_page(ctx, filters)?),
            Route::FileSources => Self::FileSources(UiFileSources::new_page(ctx, filters)?),
            Route::OutwardFiles => Self::OutwardFiles(UiOutwardFiles::new_page(ctx, filters)?),
            Route::FileValidation => {
                Self::FileValidation(UiFileValidation::new_page(ctx, filters)?)
            }
            Route::AuditLogs => Self::AuditLogs(UiAuditLogs::new_page(ctx, filters)?),
            Route::Reports => Self::Reports(UiReports::new_page(ctx, filters)?),
            Route::Departments => Self::Departments(UiDepartments::new_page(ctx, filters)?),
            Route::AdminSettings => Self::AdminSettings(UiAdminSettings::new_page(ctx, filters)?),
        }))
    }

    pub fn title_base(&self) -> &'static str {
        do_on_ui_page!(self, page, { page.title_base_from_instance() })
    }
}

impl fmt::Display for UiPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title_base())?;
        do_on_ui_page!(self, page, { page.show(f) })
    }
}
