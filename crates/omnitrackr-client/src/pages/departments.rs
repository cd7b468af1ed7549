use omnitrackr_client_core::Route;
use omnitrackr_shared::status::ValidationStatus;
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{cli::PageFilters, sample_data::SampleData, ui_helpers::write_table};

#[derive(Debug)]
pub struct UiDepartments {
    heading: String,
    summaries: Vec<DepartmentSummary>,
}

#[derive(Debug, PartialEq, Eq)]
struct DepartmentSummary {
    name: String,
    sources: usize,
    open_alerts: usize,
    failed_validations: usize,
    audit_entries: usize,
}

impl DepartmentSummary {
    fn new(name: &str, data: &SampleData) -> Self {
        Self {
            name: name.to_string(),
            sources: data.sources.iter().filter(|x| x.department == name).count(),
            open_alerts: data
                .alerts
                .iter()
                .filter(|x| x.department == name && x.status.is_unresolved())
                .count(),
            failed_validations: data
                .validations
                .iter()
                .filter(|x| x.department == name && x.status == ValidationStatus::Failed)
                .count(),
            audit_entries: data
                .audit_logs
                .iter()
                .filter(|x| x.department == name)
                .count(),
        }
    }
}

impl DisplayablePage for UiDepartments {
    fn route() -> Route {
        Route::Departments
    }

    /// One summary per department the session may see
    fn new_page(ctx: &PageContext<'_>, _filters: &PageFilters) -> anyhow::Result<Self> {
        let is_admin = ctx
            .scope
            .identity()
            .is_some_and(|identity| identity.role.is_admin());
        let visible = ctx.scope.visible_departments();
        let heading = if is_admin {
            "All Departments".to_string()
        } else {
            visible
                .first()
                .map(|x| x.to_string())
                .unwrap_or_else(|| "No Department".to_string())
        };
        let summaries = visible
            .into_iter()
            .map(|department| DepartmentSummary::new(department, ctx.data))
            .collect();
        Ok(Self { heading, summaries })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        let rows: Vec<_> = self
            .summaries
            .iter()
            .map(|summary| {
                [
                    summary.name.clone(),
                    summary.sources.to_string(),
                    summary.open_alerts.to_string(),
                    summary.failed_validations.to_string(),
                    summary.audit_entries.to_string(),
                ]
            })
            .collect();
        write_table(
            f,
            [
                "Department",
                "Sources",
                "Open Alerts",
                "Failed Validations",
                "Audit Entries",
            ],
            &rows,
        )
    }
}
