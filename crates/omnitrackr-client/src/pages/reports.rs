use omnitrackr_client_core::Route;
use omnitrackr_shared::status::HasBadge as _;
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{cli::PageFilters, sample_data::ScheduledReport, ui_helpers::write_table};

/// Scheduled reports are shared by every department so no scope applies
#[derive(Debug)]
pub struct UiReports {
    reports: Vec<ScheduledReport>,
}

impl DisplayablePage for UiReports {
    fn route() -> Route {
        Route::Reports
    }

    fn new_page(ctx: &PageContext<'_>, _filters: &PageFilters) -> anyhow::Result<Self> {
        Ok(Self {
            reports: ctx.data.reports.clone(),
        })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<_> = self
            .reports
            .iter()
            .map(|report| {
                [
                    report.name.clone(),
                    report.frequency.clone(),
                    report.recipients.clone(),
                    report.format.clone(),
                    report.status.badge().to_string(),
                ]
            })
            .collect();
        write_table(
            f,
            ["Report", "Frequency", "Recipients", "Format", "Status"],
            &rows,
        )
    }
}
