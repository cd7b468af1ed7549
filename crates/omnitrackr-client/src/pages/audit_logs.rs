use omnitrackr_client_core::Route;
use omnitrackr_shared::status::{AuditAction, AuditStatus, HasBadge as _};
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{
    cli::PageFilters,
    sample_data::AuditRecord,
    ui_helpers::{contains_ignore_case, parse_filter, write_table},
};

#[derive(Debug)]
pub struct UiAuditLogs {
    logs: Vec<AuditRecord>,
}

impl DisplayablePage for UiAuditLogs {
    fn route() -> Route {
        Route::AuditLogs
    }

    /// Search matches the file name, the source or the action as displayed
    fn new_page(ctx: &PageContext<'_>, filters: &PageFilters) -> anyhow::Result<Self> {
        let status: Option<AuditStatus> = parse_filter(filters.status.as_deref())?;
        let action: Option<AuditAction> = parse_filter(filters.action.as_deref())?;
        let search = filters.search.as_deref().unwrap_or_default();
        let logs = ctx
            .scope
            .filter(&ctx.data.audit_logs)
            .into_iter()
            .filter(|log| {
                contains_ignore_case(&log.file_name, search)
                    || contains_ignore_case(&log.source, search)
                    || contains_ignore_case(log.action.badge().label, search)
            })
            .filter(|log| status.is_none_or(|x| log.status == x))
            .filter(|log| action.is_none_or(|x| log.action == x))
            .cloned()
            .collect();
        Ok(Self { logs })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<_> = self
            .logs
            .iter()
            .map(|log| {
                [
                    log.timestamp.clone(),
                    log.file_name.clone(),
                    log.source.clone(),
                    log.department.clone(),
                    log.action.badge().to_string(),
                    log.status.badge().to_string(),
                    log.user.clone(),
                ]
            })
            .collect();
        write_table(
            f,
            [
                "Timestamp",
                "File",
                "Source",
                "Department",
                "Action",
                "Status",
                "User",
            ],
            &rows,
        )
    }
}
