use omnitrackr_client_core::Route;
use omnitrackr_shared::status::{AlertKind, AlertStatus, HasBadge as _};
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{
    cli::PageFilters,
    sample_data::AlertRecord,
    ui_helpers::{contains_ignore_case, parse_filter, write_table},
};

#[derive(Debug)]
pub struct UiAlerts {
    alerts: Vec<AlertRecord>,
}

impl DisplayablePage for UiAlerts {
    fn route() -> Route {
        Route::Alerts
    }

    fn new_page(ctx: &PageContext<'_>, filters: &PageFilters) -> anyhow::Result<Self> {
        let kind: Option<AlertKind> = parse_filter(filters.kind.as_deref())?;
        let status: Option<AlertStatus> = parse_filter(filters.status.as_deref())?;
        let search = filters.search.as_deref().unwrap_or_default();
        let alerts = ctx
            .scope
            .filter(&ctx.data.alerts)
            .into_iter()
            .filter(|alert| kind.is_none_or(|x| alert.kind == x))
            .filter(|alert| status.is_none_or(|x| alert.status == x))
            .filter(|alert| {
                contains_ignore_case(&alert.title, search)
                    || contains_ignore_case(&alert.description, search)
            })
            .cloned()
            .collect();
        Ok(Self { alerts })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Active Alerts", self.alerts.len())?;
        let rows: Vec<_> = self
            .alerts
            .iter()
            .map(|alert| {
                [
                    alert.id.to_string(),
                    alert.kind.badge().to_string(),
                    alert.title.clone(),
                    alert.department.clone(),
                    alert.priority.badge().to_string(),
                    alert.status.badge().to_string(),
                    alert.assigned_to.clone(),
                ]
            })
            .collect();
        write_table(
            f,
            [
                "ID",
                "Type",
                "Title",
                "Department",
                "Priority",
                "Status",
                "Assigned To",
            ],
            &rows,
        )
    }
}

impl UiAlerts {
    pub fn ids(&self) -> Vec<u32> {
        self.alerts.iter().map(|x| x.id).collect()
    }
}
